// src/presentation/http/controllers/authors.rs
use crate::application::{
    commands::authors::{
        CreateAuthorCommand, DeleteAuthorCommand, RequestAuthorDeletionCommand,
        UpdateAuthorCommand,
    },
    dto::AuthorDto,
    queries::authors::GetAuthorByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Body for creating or replacing an author. Missing names are treated as
/// empty so they fail validation with a field message.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    #[serde(default)]
    #[schema(example = "John")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Doe")]
    pub last_name: String,
}

#[utoipa::path(
    get,
    path = "/api/authors",
    responses(
        (status = 200, description = "All authors ordered by id.", body = [AuthorDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Authors"
)]
pub async fn list_authors(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AuthorDto>>> {
    state
        .services
        .author_queries
        .list_authors()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/authors/{id}",
    params(("id" = i64, Path, description = "Author identifier")),
    responses(
        (status = 200, description = "The author.", body = AuthorDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Author not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Authors"
)]
pub async fn get_author(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<AuthorDto>> {
    state
        .services
        .author_queries
        .get_author_by_id(GetAuthorByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/authors",
    request_body = AuthorRequest,
    responses(
        (status = 200, description = "Author created.", body = AuthorDto),
        (status = 400, description = "Invalid names.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Authors"
)]
pub async fn create_author(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<AuthorRequest>,
) -> HttpResult<Json<AuthorDto>> {
    let command = CreateAuthorCommand {
        first_name: payload.first_name,
        last_name: payload.last_name,
    };

    state
        .services
        .author_commands
        .create_author(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/authors/{id}",
    params(("id" = i64, Path, description = "Author identifier")),
    request_body = AuthorRequest,
    responses(
        (status = 200, description = "Author updated.", body = AuthorDto),
        (status = 400, description = "Invalid names.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Author not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Authors"
)]
pub async fn update_author(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<AuthorRequest>,
) -> HttpResult<Json<AuthorDto>> {
    let command = UpdateAuthorCommand {
        id,
        first_name: payload.first_name,
        last_name: payload.last_name,
    };

    state
        .services
        .author_commands
        .update_author(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/authors/{id}",
    params(("id" = i64, Path, description = "Author identifier")),
    responses(
        (status = 204, description = "Author and its documents deleted."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Author not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Authors"
)]
pub async fn delete_author(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<StatusCode> {
    tracing::info!(author_id = id, requested_by = %user.username, "deleting author");
    state
        .services
        .author_commands
        .delete_author(DeleteAuthorCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/authors/{id}/documents/delete",
    params(("id" = i64, Path, description = "Author identifier")),
    responses(
        (status = 200, description = "Deletion queued; the reply is a plain text acknowledgment.", body = String, content_type = "text/plain"),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Queue unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Authors"
)]
pub async fn request_documents_deletion(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<String> {
    tracing::info!(author_id = id, requested_by = %user.username, "queueing author deletion");
    state
        .services
        .author_commands
        .request_author_deletion(RequestAuthorDeletionCommand { author_id: id })
        .await
        .into_http()?;

    Ok(format!("Documents deletion for author {id} has been requested."))
}
