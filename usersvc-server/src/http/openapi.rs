//! OpenAPI description and Swagger UI

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::routes::{health, root, users};
use crate::models::{CreateUser, UpdateUser, User};

/// Path of the interactive documentation UI
pub const DOCS_PATH: &str = "/docs";

/// Path of the machine-readable OpenAPI document
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "usersvc",
        description = "CRUD over an in-memory collection of users"
    ),
    paths(
        root::welcome,
        health::health,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(schemas(User, CreateUser, UpdateUser, health::HealthResponse)),
    tags(
        (name = "users", description = "Users resource"),
        (name = "system", description = "Welcome and health")
    )
)]
pub struct ApiDoc;

/// Render the OpenAPI document as pretty-printed JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}

/// Swagger UI plus the JSON document it reads from
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new(DOCS_PATH)
        .url(OPENAPI_PATH, ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_users_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/"));
        assert!(paths.contains_key("/users"));
        assert!(paths.contains_key("/users/{id}"));

        let by_id = &paths["/users/{id}"];
        assert!(by_id.get.is_some());
        assert!(by_id.put.is_some());
        assert!(by_id.delete.is_some());
        assert!(paths["/users"].post.is_some());
    }

    #[test]
    fn json_names_user_schema() {
        let json = openapi_json().unwrap();
        assert!(json.contains("\"User\""));
        assert!(json.contains("\"CreateUser\""));
    }
}
