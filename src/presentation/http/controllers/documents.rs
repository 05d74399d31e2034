// src/presentation/http/controllers/documents.rs
use crate::application::{
    commands::documents::{CreateDocumentCommand, DeleteDocumentCommand, UpdateDocumentCommand},
    dto::DocumentDto,
    queries::documents::GetDocumentByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    #[serde(default)]
    #[schema(example = "Spring Boot Guide")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "0123456789")]
    pub body: String,
    pub author_id: Option<i64>,
    #[serde(default)]
    pub references: Vec<String>,
}

/// Only title and body can change; author and references stay as created.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[utoipa::path(
    get,
    path = "/api/documents",
    responses(
        (status = 200, description = "All documents ordered by id.", body = [DocumentDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Documents"
)]
pub async fn list_documents(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<DocumentDto>>> {
    state
        .services
        .document_queries
        .list_documents()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    params(("id" = i64, Path, description = "Document identifier")),
    responses(
        (status = 200, description = "The document.", body = DocumentDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Document not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Documents"
)]
pub async fn get_document(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<DocumentDto>> {
    state
        .services
        .document_queries
        .get_document_by_id(GetDocumentByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/documents",
    request_body = CreateDocumentRequest,
    responses(
        (status = 200, description = "Document created.", body = DocumentDto),
        (status = 400, description = "Invalid title or body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Referenced author not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Documents"
)]
pub async fn create_document(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateDocumentRequest>,
) -> HttpResult<Json<DocumentDto>> {
    let command = CreateDocumentCommand {
        title: payload.title,
        body: payload.body,
        author_id: payload.author_id,
        references: payload.references,
    };

    state
        .services
        .document_commands
        .create_document(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/documents/{id}",
    params(("id" = i64, Path, description = "Document identifier")),
    request_body = UpdateDocumentRequest,
    responses(
        (status = 200, description = "Document updated.", body = DocumentDto),
        (status = 400, description = "Invalid title or body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Document not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Documents"
)]
pub async fn update_document(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateDocumentRequest>,
) -> HttpResult<Json<DocumentDto>> {
    let command = UpdateDocumentCommand {
        id,
        title: payload.title,
        body: payload.body,
    };

    state
        .services
        .document_commands
        .update_document(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    params(("id" = i64, Path, description = "Document identifier")),
    responses(
        (status = 204, description = "Document deleted."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Document not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = [])),
    tag = "Documents"
)]
pub async fn delete_document(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<StatusCode> {
    tracing::info!(document_id = id, requested_by = %user.username, "deleting document");
    state
        .services
        .document_commands
        .delete_document(DeleteDocumentCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
