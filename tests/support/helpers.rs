// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryStore, PlainPasswordHasher, RecordingPublisher};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use documan::application::{
    dto::ApiCredentials,
    ports::{messaging::AuthorDeletionPublisher, security::PasswordHasher, time::Clock},
    services::ApplicationServices,
};
use documan::domain::{
    author::{AuthorReadRepository, AuthorWriteRepository},
    document::{DocumentReadRepository, DocumentWriteRepository},
};
use documan::infrastructure::messaging::{AuthorDeletionHandler, Disposition};
use documan::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use headers::{Authorization, HeaderMapExt};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt as _;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "s3cret-pass";

/// Router plus handles on the in-memory collaborators behind it.
pub struct TestApp {
    pub router: axum::Router,
    pub services: Arc<ApplicationServices>,
    pub store: InMemoryStore,
    pub publisher: Arc<RecordingPublisher>,
}

pub fn build_services(
    store: &InMemoryStore,
    publisher: Arc<RecordingPublisher>,
) -> Arc<ApplicationServices> {
    let author_write: Arc<dyn AuthorWriteRepository> = Arc::new(store.clone());
    let author_read: Arc<dyn AuthorReadRepository> = Arc::new(store.clone());
    let document_write: Arc<dyn DocumentWriteRepository> = Arc::new(store.clone());
    let document_read: Arc<dyn DocumentReadRepository> = Arc::new(store.clone());
    let deletion_publisher: Arc<dyn AuthorDeletionPublisher> = publisher;
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(PlainPasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);

    Arc::new(ApplicationServices::new(
        author_write,
        author_read,
        document_write,
        document_read,
        deletion_publisher,
        password_hasher,
        ApiCredentials {
            username: TEST_USERNAME.into(),
            password_hash: PlainPasswordHasher::hash_of(TEST_PASSWORD),
        },
        clock,
    ))
}

pub fn spawn_test_app() -> TestApp {
    let store = InMemoryStore::new();
    let publisher = Arc::new(RecordingPublisher::default());
    let services = build_services(&store, Arc::clone(&publisher));
    let state = HttpState {
        services: Arc::clone(&services),
    };

    TestApp {
        router: build_router_with_rate_limiter(state, false),
        services,
        store,
        publisher,
    }
}

pub fn make_test_router() -> axum::Router {
    spawn_test_app().router
}

impl TestApp {
    /// Send a request carrying valid Basic credentials.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut req = json_request(method, uri, body);
        req.headers_mut()
            .typed_insert(Authorization::basic(TEST_USERNAME, TEST_PASSWORD));
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn send_raw(&self, req: Request<Body>) -> Response {
        self.router.clone().oneshot(req).await.unwrap()
    }

    /// Feed every recorded deletion message through the queue handler,
    /// the way the stream consumer would.
    pub async fn run_deletion_consumer(&self) -> Vec<Disposition> {
        let handler = AuthorDeletionHandler::new(Arc::clone(&self.services.author_commands));
        let mut dispositions = Vec::new();
        for message in self.publisher.drain() {
            let payload = message.to_json().unwrap();
            dispositions.push(handler.handle(&payload).await);
        }
        dispositions
    }

    pub async fn create_author(&self, first_name: &str, last_name: &str) -> Value {
        let response = self
            .send(
                Method::POST,
                "/api/authors",
                Some(serde_json::json!({ "firstName": first_name, "lastName": last_name })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    pub async fn create_document(&self, title: &str, body: &str, author_id: Option<i64>) -> Value {
        let response = self
            .send(
                Method::POST,
                "/api/documents",
                Some(serde_json::json!({ "title": title, "body": body, "authorId": author_id })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }
}

/// Raw `Authorization` header value, for requests built by hand.
pub fn basic_auth_value(username: &str, password: &str) -> axum::http::HeaderValue {
    let mut headers = axum::http::HeaderMap::new();
    headers.typed_insert(Authorization::basic(username, password));
    headers
        .remove(header::AUTHORIZATION)
        .expect("authorization header")
}

pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("expected json body")
}

pub async fn body_text(resp: Response) -> String {
    String::from_utf8(body_bytes(resp).await).expect("utf-8 body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status
/// and error string. Returns the parsed body for further checks.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
