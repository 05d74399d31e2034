// src/presentation/http/middleware/basic_auth.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Basic};

/// Require HTTP Basic credentials matching the configured account.
///
/// On success the `AuthenticatedUser` is stored in the request extensions.
/// Usage: `.route_layer(axum::middleware::from_fn(require_basic_auth))`
pub async fn require_basic_auth(mut req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let Some(header) = req.headers().typed_get::<Authorization<Basic>>() else {
        return HttpError::unauthorized("missing credentials").into_response();
    };

    match state
        .services
        .authenticate_basic(header.username(), header.password())
        .await
    {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => {
            tracing::warn!(
                username = %header.username(),
                path = %req.uri().path(),
                "basic authentication failed"
            );
            HttpError::from_error(err).into_response()
        }
    }
}
