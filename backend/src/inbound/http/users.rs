//! Users API handlers.
//!
//! ```text
//! GET /state
//! POST /users {"email":"a@b.com","value":128}
//! PUT /users/1 {"value":500}
//! POST /random-user
//! ```

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{DEFAULT_VALUE, Error, SEEDED_VALUE, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// Contact address to record; not validated for format.
    pub email: String,
    /// Initial counter value; defaults to 128 when omitted.
    #[serde(default = "default_value")]
    pub value: i32,
}

fn default_value() -> i32 {
    DEFAULT_VALUE
}

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    /// Replacement counter value.
    pub value: i32,
}

/// Response body for `GET /state`: every stored row, ascending by id.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    /// Stored rows in ascending id order.
    pub users: Vec<User>,
}

/// List the full stored state.
#[utoipa::path(
    get,
    path = "/state",
    responses(
        (status = 200, description = "All users ascending by id", body = crate::inbound::http::schemas::StateSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getState"
)]
#[get("/state")]
pub async fn get_state(state: web::Data<HttpState>) -> ApiResult<web::Json<StateResponse>> {
    let users = state.users.list_all().await?;
    Ok(web::Json(StateResponse { users }))
}

/// Create a user row.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created row", body = crate::inbound::http::schemas::UserSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let CreateUserRequest { email, value } = payload.into_inner();
    let user = state.users.insert(&email, value).await?;
    Ok(web::Json(user))
}

/// Replace a user's value.
#[utoipa::path(
    put,
    path = "/users/{id}",
    request_body = UpdateUserRequest,
    params(("id" = i32, Path, description = "Store-assigned user id")),
    responses(
        (status = 200, description = "Updated row", body = crate::inbound::http::schemas::UserSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = path.into_inner();
    match state.users.set_value(id, payload.value).await? {
        Some(user) => Ok(web::Json(user)),
        None => Err(Error::not_found(format!("no user with id {id}"))),
    }
}

/// Create a row seeded with a generated email and a fixed value of 256.
#[utoipa::path(
    post,
    path = "/random-user",
    responses(
        (status = 200, description = "Seeded row", body = crate::inbound::http::schemas::UserSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createRandomUser"
)]
#[post("/random-user")]
pub async fn random_user(state: web::Data<HttpState>) -> ApiResult<web::Json<User>> {
    let email = state.generator.generate();
    let user = state.users.insert(&email, SEEDED_VALUE).await?;
    Ok(web::Json(user))
}
