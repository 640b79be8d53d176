// ============================
// crates/backend-lib/src/handlers/pages.rs
// ============================
//! Page handlers: login, signup and home views.
use axum::response::{Html, IntoResponse, Response};
use tower_sessions::Session;

use super::{redirect_found, render};
use crate::auth::session::current_user;
use crate::error::AppError;
use crate::views::{HomeView, LoginView, SignupView};

/// `GET /` — the login view, no auth check
pub async fn login_page() -> Result<Html<String>, AppError> {
    render(LoginView)
}

/// `GET /signup` — the signup view, no auth check
pub async fn signup_page() -> Result<Html<String>, AppError> {
    render(SignupView)
}

/// `GET /home` — the home view for the session's user, or a redirect to
/// the login page when the session is unauthenticated.
pub async fn home_page(session: Session) -> Result<Response, AppError> {
    match current_user(&session).await? {
        Some(name) => Ok(render(HomeView { name: &name })?.into_response()),
        None => Ok(redirect_found("/")),
    }
}
