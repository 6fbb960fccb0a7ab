//! Users resource endpoints, mounted under `/users`

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, UserIdParam};
use crate::http::server::AppState;
use crate::models::{CreateUser, UpdateUser, User};

/// GET /users - every user, in insertion order
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses((status = 200, description = "All users", body = [User]))
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.store.list().await)
}

/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No user with that id", body = String, content_type = "text/plain")
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    UserIdParam(id): UserIdParam,
) -> Result<Json<User>, ApiError> {
    let user = state.store.get(id).await?;
    Ok(Json(user))
}

/// POST /users - create a user from `{name, email}`
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Name or email missing", body = String, content_type = "text/plain")
    )
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new = req.validate()?;
    let user = state.store.create(new).await;
    tracing::info!(id = user.id, "created user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/{id} - overwrite the supplied fields
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Malformed JSON body", body = String, content_type = "text/plain"),
        (status = 404, description = "No user with that id", body = String, content_type = "text/plain")
    )
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    UserIdParam(id): UserIdParam,
    JsonBody(changes): JsonBody<UpdateUser>,
) -> Result<Json<User>, ApiError> {
    let user = state.store.update(id, changes).await?;
    Ok(Json(user))
}

/// DELETE /users/{id} - returns the removed user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 404, description = "No user with that id", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserIdParam(id): UserIdParam,
) -> Result<Json<User>, ApiError> {
    let user = state.store.delete(id).await?;
    tracing::info!(id, "deleted user");
    Ok(Json(user))
}

/// User routes, relative to the `/users` mount point
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
