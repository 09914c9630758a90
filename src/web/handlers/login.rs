//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the login page.
///
/// Renders `templates/login.html` with a token input form.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// # Authentication
///
/// Users enter their access token, which is stored in a cookie for
/// subsequent requests to protected dashboard routes.
pub async fn login_handler() -> impl IntoResponse {
    LoginTemplate {}
}
