use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::tickets::models::{Ticket, TicketPriority, TicketStatus};

/// Response DTO for ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponseDto {
    pub id: String,
    pub title: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub assignee: String,
    pub created_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponseDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            title: t.title,
            status: t.status,
            priority: t.priority,
            assignee: t.assignee,
            created_at: t.created_at,
        }
    }
}

// Create request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTicketDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    pub status: TicketStatus,

    pub priority: TicketPriority,

    pub assignee: String,
}

/// A field in a partial update body.
///
/// `Absent` means the key was not sent at all, `Null` means it was sent as
/// JSON `null`. Fields must be marked `#[serde(default)]` for `Absent` to be
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Collapse into the value to apply, if any
    pub fn into_value(self) -> Option<T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Absent | Patch::Null => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_value().serialize(serializer)
    }
}

fn reject_null<T>(patch: &Patch<T>) -> Result<(), ValidationError> {
    if patch.is_null() {
        return Err(ValidationError::new("null").with_message("field cannot be null".into()));
    }
    Ok(())
}

fn validate_title_patch(patch: &Patch<String>) -> Result<(), ValidationError> {
    reject_null(patch)?;
    if patch.as_value().is_some_and(|title| title.is_empty()) {
        return Err(
            ValidationError::new("length").with_message("title must not be empty".into()),
        );
    }
    Ok(())
}

// Update request; only the keys present in the body are applied
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTicketDto {
    #[serde(default)]
    #[validate(custom(function = "validate_title_patch"))]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,

    #[serde(default)]
    #[validate(custom(function = "reject_null"))]
    #[schema(value_type = Option<TicketStatus>)]
    pub status: Patch<TicketStatus>,

    #[serde(default)]
    #[validate(custom(function = "reject_null"))]
    #[schema(value_type = Option<TicketPriority>)]
    pub priority: Patch<TicketPriority>,

    #[serde(default)]
    #[validate(custom(function = "reject_null"))]
    #[schema(value_type = Option<String>)]
    pub assignee: Patch<String>,
}

/// Validated set of field changes handed to the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketChanges {
    pub title: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub assignee: Option<String>,
}

impl UpdateTicketDto {
    pub fn into_changes(self) -> TicketChanges {
        TicketChanges {
            title: self.title.into_value(),
            status: self.status.into_value(),
            priority: self.priority.into_value(),
            assignee: self.assignee.into_value(),
        }
    }
}

impl TicketChanges {
    pub fn is_empty(&self) -> bool {
        self == &TicketChanges::default()
    }

    /// Apply present fields; `id` and `created_at` are never touched
    pub fn apply_to(self, ticket: &mut Ticket) {
        if let Some(title) = self.title {
            ticket.title = title;
        }
        if let Some(status) = self.status {
            ticket.status = status;
        }
        if let Some(priority) = self.priority {
            ticket.priority = priority;
        }
        if let Some(assignee) = self.assignee {
            ticket.assignee = assignee;
        }
    }
}
