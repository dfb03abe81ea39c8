//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API. Paths come from the inbound layer; schemas are the
//! adapter-side wrappers so domain types stay framework-agnostic. The
//! generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, StateSchema, UserSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User-value service API",
        description = "CRUD-style operations over the users table plus seed-data generation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_state,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::random_user,
        crate::inbound::http::agent::agent_action,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, StateSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "User row operations"),
        (name = "agent", description = "Agent value adjustments"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_registers_every_endpoint() {
        let doc = ApiDoc::openapi();

        for expected in [
            "/state",
            "/users",
            "/users/{id}",
            "/agent/action",
            "/random-user",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(expected),
                "missing path {expected}"
            );
        }
    }
}
