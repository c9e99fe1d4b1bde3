use utoipa::{Modify, OpenApi};

use crate::core::app;
use crate::features::tickets::{dtos as tickets_dtos, handlers as tickets_handlers, models};
use crate::shared::types::{ApiResponse, OkResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        app::health_check,
        // Tickets
        tickets_handlers::list_tickets,
        tickets_handlers::create_ticket,
        tickets_handlers::update_ticket,
        tickets_handlers::delete_ticket,
    ),
    components(
        schemas(
            ApiResponse,
            OkResponse,
            // Tickets
            models::TicketStatus,
            models::TicketPriority,
            tickets_dtos::TicketResponseDto,
            tickets_dtos::CreateTicketDto,
            tickets_dtos::UpdateTicketDto,
        )
    ),
    tags(
        (name = "tickets", description = "Ticket tracking"),
        (name = "health", description = "Liveness probe"),
    ),
    info(
        title = "Ticket Tracker API",
        version = "0.1.0",
        description = "In-memory ticket tracking API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct DocsInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for DocsInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
