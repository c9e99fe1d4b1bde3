use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{CreateTicketDto, TicketChanges, TicketResponseDto};
use crate::features::tickets::models::{Ticket, TicketPriority, TicketStatus};

/// Records loaded into every fresh store, in insertion order
const SEED_TICKETS: [(&str, TicketStatus, TicketPriority, &str); 3] = [
    (
        "Login bug on /auth",
        TicketStatus::Open,
        TicketPriority::High,
        "Alex",
    ),
    (
        "Upgrade dependencies",
        TicketStatus::InProgress,
        TicketPriority::Low,
        "Jamie",
    ),
    (
        "Add billing address field",
        TicketStatus::Closed,
        TicketPriority::Medium,
        "Sam",
    ),
];

const SEED_FIRST_NUMBER: u32 = 1001;

// Tickets keyed by insertion sequence, plus an id -> sequence index
#[derive(Default)]
struct TicketStore {
    records: BTreeMap<u64, Ticket>,
    index: HashMap<String, u64>,
    next_seq: u64,
}

impl TicketStore {
    fn insert(&mut self, ticket: Ticket) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(ticket.id.clone(), seq);
        self.records.insert(seq, ticket);
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Ticket> {
        let seq = self.index.get(id)?;
        self.records.get_mut(seq)
    }

    fn remove(&mut self, id: &str) -> Option<Ticket> {
        let seq = self.index.remove(id)?;
        self.records.remove(&seq)
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn newest_first(&self) -> impl Iterator<Item = &Ticket> {
        self.records.values().rev()
    }
}

/// Service owning the in-memory ticket store
pub struct TicketService {
    store: RwLock<TicketStore>,
}

impl std::fmt::Debug for TicketService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketService").finish_non_exhaustive()
    }
}

impl TicketService {
    /// Create a store seeded with the `T-1001`..`T-1003` records
    pub fn new() -> Self {
        Self::seeded_at(Utc::now())
    }

    /// Create a store with no records
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            store: RwLock::new(TicketStore::default()),
        }
    }

    fn seeded_at(now: DateTime<Utc>) -> Self {
        let mut store = TicketStore::default();
        for (number, (title, status, priority, assignee)) in
            (SEED_FIRST_NUMBER..).zip(SEED_TICKETS)
        {
            store.insert(Ticket {
                id: format!("T-{}", number),
                title: title.to_string(),
                status,
                priority,
                assignee: assignee.to_string(),
                created_at: now,
            });
        }

        Self {
            store: RwLock::new(store),
        }
    }

    /// List all tickets, most recently inserted first
    pub async fn list(&self) -> Vec<TicketResponseDto> {
        let store = self.store.read().await;
        store
            .newest_first()
            .cloned()
            .map(TicketResponseDto::from)
            .collect()
    }

    /// Create a ticket with a generated id and creation time
    pub async fn create(&self, dto: CreateTicketDto) -> Result<TicketResponseDto> {
        let mut store = self.store.write().await;

        let mut id = Uuid::new_v4().to_string();
        while store.contains(&id) {
            id = Uuid::new_v4().to_string();
        }

        let ticket = Ticket {
            id,
            title: dto.title,
            status: dto.status,
            priority: dto.priority,
            assignee: dto.assignee,
            created_at: Utc::now(),
        };
        store.insert(ticket.clone());

        tracing::info!(
            ticket_id = %ticket.id,
            status = %ticket.status,
            priority = %ticket.priority,
            "Ticket created"
        );
        Ok(ticket.into())
    }

    /// Apply the present fields of `changes` to an existing ticket
    pub async fn update(&self, id: &str, changes: TicketChanges) -> Result<TicketResponseDto> {
        let mut store = self.store.write().await;

        let Some(ticket) = store.get_mut(id) else {
            tracing::debug!(ticket_id = %id, "Update of unknown ticket");
            return Err(not_found());
        };

        if changes.is_empty() {
            return Ok(ticket.clone().into());
        }

        changes.apply_to(ticket);
        tracing::info!(ticket_id = %id, "Ticket updated");
        Ok(ticket.clone().into())
    }

    /// Remove a ticket
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut store = self.store.write().await;

        if store.remove(id).is_none() {
            tracing::debug!(ticket_id = %id, "Delete of unknown ticket");
            return Err(not_found());
        }

        tracing::info!(ticket_id = %id, "Ticket deleted");
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
