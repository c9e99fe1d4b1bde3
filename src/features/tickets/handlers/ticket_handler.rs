use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::tickets::dtos::{CreateTicketDto, TicketResponseDto, UpdateTicketDto};
use crate::features::tickets::services::TicketService;
use crate::shared::types::{ApiResponse, OkResponse};

/// List all tickets, newest first
#[utoipa::path(
    get,
    path = "/tickets",
    responses(
        (status = 200, description = "List of tickets", body = Vec<TicketResponseDto>),
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(service): State<Arc<TicketService>>,
) -> Json<Vec<TicketResponseDto>> {
    Json(service.list().await)
}

/// Create a new ticket
#[utoipa::path(
    post,
    path = "/tickets",
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketResponseDto),
        (status = 422, description = "Validation error", body = ApiResponse)
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    AppJson(dto): AppJson<CreateTicketDto>,
) -> Result<(StatusCode, Json<TicketResponseDto>)> {
    dto.validate()?;

    let ticket = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Update a ticket
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/tickets/{id}",
    params(
        ("id" = String, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = TicketResponseDto),
        (status = 404, description = "Ticket not found", body = ApiResponse),
        (status = 422, description = "Validation error", body = ApiResponse)
    ),
    tag = "tickets"
)]
pub async fn update_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateTicketDto>,
) -> Result<Json<TicketResponseDto>> {
    dto.validate()?;

    let ticket = service.update(&id, dto.into_changes()).await?;
    Ok(Json(ticket))
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    params(
        ("id" = String, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket deleted", body = OkResponse),
        (status = 404, description = "Ticket not found", body = ApiResponse)
    ),
    tag = "tickets"
)]
pub async fn delete_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>> {
    service.delete(&id).await?;
    Ok(Json(OkResponse::ok()))
}
