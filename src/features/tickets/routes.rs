use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route(
            "/tickets",
            get(handlers::list_tickets).post(handlers::create_ticket),
        )
        .route(
            "/tickets/{id}",
            put(handlers::update_ticket).delete(handlers::delete_ticket),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tickets::dtos::TicketResponseDto;
    use crate::features::tickets::models::{TicketPriority, TicketStatus};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(TicketService::new()))).unwrap()
    }

    async fn list(server: &TestServer) -> Vec<TicketResponseDto> {
        let response = server.get("/tickets").await;
        response.assert_status_ok();
        response.json::<Vec<TicketResponseDto>>()
    }

    #[tokio::test]
    async fn test_list_returns_seeded_tickets() {
        let server = server();
        let response = server.get("/tickets").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let tickets = body.as_array().unwrap();
        assert_eq!(tickets.len(), 3);
        assert_eq!(tickets[0]["id"], "T-1003");
        assert_eq!(tickets[1]["status"], "In Progress");
        assert_eq!(tickets[2]["title"], "Login bug on /auth");
        assert!(tickets[2]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_create_then_list_newest_first() {
        let server = server();
        let response = server
            .post("/tickets")
            .json(&json!({
                "title": "X",
                "status": "Open",
                "priority": "Low",
                "assignee": "Bo"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created = response.json::<TicketResponseDto>();
        assert!(!created.id.is_empty());
        assert_eq!(created.title, "X");
        assert_eq!(created.status, TicketStatus::Open);
        assert_eq!(created.priority, TicketPriority::Low);
        assert_eq!(created.assignee, "Bo");

        let tickets = list(&server).await;
        assert_eq!(tickets.len(), 4);
        assert_eq!(tickets[0], created);
    }

    #[tokio::test]
    async fn test_create_rejects_schema_violations() {
        let server = server();
        let bodies = [
            json!({ "title": "X", "status": "Blocked", "priority": "Low", "assignee": "Bo" }),
            json!({ "title": "X", "status": "Open", "priority": "Urgent", "assignee": "Bo" }),
            json!({ "title": "X", "status": "Open", "priority": "Low" }),
            json!({ "title": "", "status": "Open", "priority": "Low", "assignee": "Bo" }),
            json!({ "title": 42, "status": "Open", "priority": "Low", "assignee": "Bo" }),
        ];

        for body in bodies {
            let response = server.post("/tickets").json(&body).await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            let error = response.json::<Value>();
            assert_eq!(error["success"], false);
        }

        assert_eq!(list(&server).await.len(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let server = server();
        let response = server
            .post("/tickets")
            .content_type("application/json")
            .bytes("{not json".into())
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_non_json_body_is_unprocessable() {
        let server = server();
        let before = list(&server).await;

        let response = server.post("/tickets").text("title=X").await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);

        server
            .put("/tickets/T-1001")
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        server
            .put("/tickets/does-not-exist")
            .text("x")
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(list(&server).await, before);
    }

    #[tokio::test]
    async fn test_update_status_only() {
        let server = server();
        let original = list(&server)
            .await
            .into_iter()
            .find(|t| t.id == "T-1002")
            .unwrap();

        let response = server
            .put("/tickets/T-1002")
            .json(&json!({ "status": "Closed" }))
            .await;

        response.assert_status_ok();
        let updated = response.json::<TicketResponseDto>();
        assert_eq!(updated.status, TicketStatus::Closed);
        assert_eq!(updated.id, "T-1002");
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.priority, original.priority);
        assert_eq!(updated.assignee, original.assignee);
        assert_eq!(updated.created_at, original.created_at);
    }

    #[tokio::test]
    async fn test_update_with_empty_body_is_noop() {
        let server = server();
        let before = list(&server).await;

        let response = server.put("/tickets/T-1001").json(&json!({})).await;

        response.assert_status_ok();
        let updated = response.json::<TicketResponseDto>();
        assert_eq!(Some(&updated), before.iter().find(|t| t.id == "T-1001"));
        assert_eq!(list(&server).await, before);
    }

    #[tokio::test]
    async fn test_update_ignores_id_and_created_at_in_body() {
        let server = server();
        let before = list(&server).await;

        let response = server
            .put("/tickets/T-1003")
            .json(&json!({
                "id": "hijack",
                "createdAt": "2000-01-01T00:00:00Z",
                "assignee": "Kim"
            }))
            .await;

        response.assert_status_ok();
        let updated = response.json::<TicketResponseDto>();
        let original = before.iter().find(|t| t.id == "T-1003").unwrap();
        assert_eq!(updated.id, "T-1003");
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.assignee, "Kim");
    }

    #[tokio::test]
    async fn test_update_rejects_null_and_empty_title() {
        let server = server();
        let before = list(&server).await;

        for body in [json!({ "title": null }), json!({ "title": "" })] {
            let response = server.put("/tickets/T-1001").json(&body).await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        }

        assert_eq!(list(&server).await, before);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_not_found() {
        let server = server();
        let before = list(&server).await;

        let response = server
            .put("/tickets/does-not-exist")
            .json(&json!({ "title": "Y" }))
            .await;

        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["message"], "Not found");
        assert_eq!(list(&server).await, before);
    }

    #[tokio::test]
    async fn test_delete_ticket() {
        let server = server();
        let response = server.delete("/tickets/T-1002").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "ok": true }));

        let ids: Vec<String> = list(&server).await.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["T-1003".to_string(), "T-1001".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_not_found() {
        let server = server();
        let before = list(&server).await;

        let response = server.delete("/tickets/does-not-exist").await;

        response.assert_status_not_found();
        assert_eq!(list(&server).await, before);
    }

    #[tokio::test]
    async fn test_fresh_services_are_isolated() {
        let first = server();
        first.delete("/tickets/T-1001").await.assert_status_ok();

        let second = server();
        assert_eq!(list(&second).await.len(), 3);
    }
}
