//! Cookie-based authentication middleware for the web dashboard.

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;

/// Authenticates dashboard requests using a cookie-stored token.
///
/// # Cookie Format
///
/// ```text
/// Cookie: dashboard_token=<token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract the `dashboard_token` cookie from the request
/// 2. Validate it via [`crate::application::services::AuthService`]
/// 3. On success, continue to the handler
/// 4. On failure or missing token, redirect to `/dashboard/login`
///
/// The redirect fires before any data is requested; an unauthenticated
/// visitor never triggers a database read.
///
/// # Differences from API Auth
///
/// Unlike the API auth middleware which returns `401 Unauthorized`,
/// this middleware redirects to the login page for a better user experience
/// in a browser context.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let token = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some("dashboard_token"), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        });

    match token {
        Some(token) => match st.auth_service.authenticate(&token).await {
            Ok(_) => Ok(next.run(req).await),
            Err(_) => Err(Redirect::to("/dashboard/login")),
        },
        None => Err(Redirect::to("/dashboard/login")),
    }
}
