// ============================
// crates/backend-lib/src/handlers/mod.rs
// ============================
//! Request handlers for the page, account and API routes.

pub mod account;
pub mod api;
pub mod pages;

use askama::Template;
use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::error::AppError;

/// Render a view to an HTML response body.
pub fn render<T: Template>(view: T) -> Result<Html<String>, AppError> {
    Ok(Html(view.render()?))
}

/// A literal `302 Found` redirect.
///
/// `axum::response::Redirect` only emits 303/307/308; the page contract
/// here is a plain 302.
pub fn redirect_found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_found_status_and_location() {
        let response = redirect_found("/");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }
}
