use axum::{
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::*;

use engine::DashboardError;

use super::{
    handlers::ApiError,
    state::{AppState, ServeError},
};

fn bearer_token<B>(req: &Request<B>) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_owned())
}

/// Accepts the `token` cookie or a bearer token and places the
/// [`CurrentSession`](super::state::CurrentSession) in the request extensions.
pub async fn auth<B>(
    cookie_jar: CookieJar,
    State(state): State<Arc<AppState>>,
    mut req: Request<B>,
    next: Next<B>,
) -> Result<impl IntoResponse, ApiError> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_owned())
        .or_else(|| bearer_token(&req));

    let Some(token) = token else {
        debug!("no token");
        return Err(ServeError::from(DashboardError::NotLoggedIn).into());
    };

    let session = state.authenticate(&token).await.map_err(|e| {
        debug!("refused token: {}", e);
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
