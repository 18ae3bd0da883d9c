//! Session middleware
//!
//! Resolves the caller's live-reading session from the `x-session-id` header
//! or the `airsense_session` cookie, ticks its walk (creating the session when
//! absent, unknown or evicted), and echoes the id back on the response.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        request::Parts,
        HeaderName, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::Response,
    Json,
};
use shared::GaussianNoise;
use uuid::Uuid;

use crate::error::{ErrorDetail, ErrorResponse};
use crate::AppState;

pub const SESSION_HEADER: &str = "x-session-id";
pub const SESSION_COOKIE: &str = "airsense_session";

/// Session and live reading resolved for the current request
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveSession {
    pub id: Uuid,
    /// Reading after this request's tick
    pub live_aqi: f64,
}

/// Pull a session id from the header first, then from the cookie
fn requested_session(headers: &axum::http::HeaderMap) -> Option<Uuid> {
    let from_header = headers
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s.trim()).ok());

    from_header.or_else(|| {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Uuid::parse_str(value).ok())
    })
}

/// Middleware that ticks the caller's walk once and attaches a
/// [`LiveSession`] to every request it wraps
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let requested = requested_session(request.headers());
    let mut noise = GaussianNoise::from_entropy();
    let tick = state.sessions.tick_or_create(requested, &mut noise).await;
    let (session_id, created) = (tick.id, tick.created);
    if created {
        tracing::info!(session_id = %session_id, "New dashboard session");
    }

    request.extensions_mut().insert(LiveSession {
        id: session_id,
        live_aqi: tick.aqi,
    });
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&session_id.to_string()) {
        headers.insert(HeaderName::from_static(SESSION_HEADER), value);
    }
    if created {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session_id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            headers.append(SET_COOKIE, value);
        }
    }

    response
}

/// Extractor for the current session
/// Use this in handlers mounted behind [`session_middleware`]
#[derive(Clone, Copy, Debug)]
pub struct CurrentSession(pub LiveSession);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<LiveSession>()
            .copied()
            .map(CurrentSession)
            .ok_or_else(|| {
                let error = ErrorResponse {
                    error: ErrorDetail {
                        code: "SESSION_REQUIRED".to_string(),
                        message: "No dashboard session attached to request".to_string(),
                        field: None,
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error))
            })
    }
}
