//! Agent action handler.
//!
//! ```text
//! POST /agent/action {"user_id":1,"action":"increment"}
//! ```
//!
//! The action string is validated before any store access; the mutation
//! itself is a single atomic step applied by the repository.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{AgentAction, Error, InvalidActionError, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /agent/action`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct AgentActionRequest {
    /// Target row id.
    pub user_id: i32,
    /// Symbolic action name: `"increment"` or `"decrement"`.
    pub action: String,
}

fn map_invalid_action(err: InvalidActionError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": "action", "allowed": ["increment", "decrement"] }))
}

/// Apply an increment or decrement step to a user's value.
#[utoipa::path(
    post,
    path = "/agent/action",
    request_body = AgentActionRequest,
    responses(
        (status = 200, description = "Updated row", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Unrecognised action", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["agent"],
    operation_id = "agentAction"
)]
#[post("/agent/action")]
pub async fn agent_action(
    state: web::Data<HttpState>,
    payload: web::Json<AgentActionRequest>,
) -> ApiResult<web::Json<User>> {
    let AgentActionRequest { user_id, action } = payload.into_inner();
    let action: AgentAction = action.parse().map_err(map_invalid_action)?;

    match state.users.adjust_value(user_id, action.delta()).await? {
        Some(user) => Ok(web::Json(user)),
        None => Err(Error::not_found(format!("no user with id {user_id}"))),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    use super::*;
    use crate::test_support::http_state;

    fn test_app(
        state: web::Data<HttpState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(state).service(agent_action)
    }

    fn action_request(user_id: i32, action: &str) -> actix_web::test::TestRequest {
        actix_test::TestRequest::post()
            .uri("/agent/action")
            .set_json(serde_json::json!({ "user_id": user_id, "action": action }))
    }

    #[actix_web::test]
    async fn increment_then_decrement_restores_the_original_value() {
        let (state, repo) = http_state();
        let app = actix_test::init_service(test_app(state)).await;
        repo.seed(&[("a@b.com", 128)]);

        let body: Value =
            actix_test::call_and_read_body_json(&app, action_request(1, "increment").to_request())
                .await;
        assert_eq!(
            body,
            serde_json::json!({ "id": 1, "email": "a@b.com", "value": 129 })
        );

        let body: Value =
            actix_test::call_and_read_body_json(&app, action_request(1, "decrement").to_request())
                .await;
        assert_eq!(body["value"], 128);
    }

    #[actix_web::test]
    async fn unknown_id_yields_not_found_and_leaves_store_unchanged() {
        let (state, repo) = http_state();
        let app = actix_test::init_service(test_app(state)).await;
        repo.seed(&[("a@b.com", 128)]);

        let response =
            actix_test::call_service(&app, action_request(999, "increment").to_request()).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "not_found");
        assert_eq!(repo.snapshot(), vec![(1, 128)]);
    }

    #[actix_web::test]
    async fn invalid_action_yields_bad_request_without_touching_the_store() {
        let (state, repo) = http_state();
        let app = actix_test::init_service(test_app(state)).await;
        repo.seed(&[("a@b.com", 128)]);

        let response =
            actix_test::call_service(&app, action_request(1, "frobnicate").to_request()).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], "action");
        assert_eq!(repo.snapshot(), vec![(1, 128)]);
    }

    #[actix_web::test]
    async fn invalid_action_is_rejected_for_unknown_ids_too() {
        let (state, repo) = http_state();
        let app = actix_test::init_service(test_app(state)).await;

        let response =
            actix_test::call_service(&app, action_request(999, "frobnicate").to_request()).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn concurrent_increments_lose_no_updates() {
        let (state, repo) = http_state();
        repo.seed(&[("a@b.com", 0)]);
        let users = state.users.clone();

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let users = users.clone();
                tokio::spawn(async move { users.adjust_value(1, 1).await })
            })
            .collect();
        for handle in handles {
            handle
                .await
                .expect("task completes")
                .expect("adjust succeeds")
                .expect("row exists");
        }

        assert_eq!(repo.snapshot(), vec![(1, 100)]);
    }
}
