// src/presentation/http/openapi.rs
use crate::application::dto::{AuthorDto, DocumentDto};
use crate::presentation::http::controllers::{authors, documents};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;


pub const OPENAPI_JSON_PATH: &str = "/v3/api-docs";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";
pub const REDOC_PATH: &str = "/redoc";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        authors::request_documents_deletion,
        documents::list_documents,
        documents::get_document,
        documents::create_document,
        documents::update_document,
        documents::delete_document,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            AuthorDto,
            DocumentDto,
            authors::AuthorRequest,
            documents::CreateDocumentRequest,
            documents::UpdateDocumentRequest,
            crate::presentation::http::error::ErrorResponse
        )
    ),
    tags(
        (name = "Authors", description = "Author management and cascading deletion"),
        (name = "Documents", description = "Document management"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "DocuMan API",
        description = "Document management backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "basicAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

/// Open routes serving the OpenAPI document, Swagger UI and Redoc.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, openapi.clone());
    let redoc = Redoc::with_url(REDOC_PATH, openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent(SWAGGER_UI_PATH) }))
}

/// Write the OpenAPI document as pretty JSON. The target defaults to
/// `spec/openapi.json` and can be overridden with `OPENAPI_SNAPSHOT_PATH`.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    write_openapi_to(path)?;
    Ok(path.to_path_buf())
}

pub fn write_openapi_to(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
