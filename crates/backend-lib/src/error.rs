// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// HTML fragment returned when a request requires an authenticated
/// session and none is present.
pub const UNAUTHORIZED_FRAGMENT: &str = "<p>Unauthorized. Please log in.</p>\n\
     <p><a href=\"/\">Go back to the login page</a></p>";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("No authenticated session")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(&'static str),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Session(_)
            | AppError::PasswordHash(_)
            | AppError::Template(_)
            | AppError::Io(_)
            | AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The user-facing body. Internal detail never leaks here; server
    /// failures all collapse to the same generic text.
    pub fn body(&self) -> String {
        match self {
            AppError::Unauthorized => UNAUTHORIZED_FRAGMENT.to_string(),
            AppError::NotFound(what) => (*what).to_string(),
            AppError::MissingField(msg) => (*msg).to_string(),
            _ => "Server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = self.body();
        if matches!(self, AppError::Unauthorized) {
            (status, Html(body)).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_app_error_display() {
        let hash_error = AppError::PasswordHash("salt generation failed".to_string());
        assert_eq!(
            hash_error.to_string(),
            "Password hash error: salt generation failed"
        );

        let io_error = AppError::Io(IoError::new(ErrorKind::NotFound, "File not found"));
        assert!(io_error.to_string().contains("IO error"));

        assert_eq!(
            AppError::Unauthorized.to_string(),
            "No authenticated session"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::PasswordHash("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("User not found.").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MissingField("New password is required.").status_code(),
            StatusCode::BAD_REQUEST
        );

        let json_err: serde_json::Error =
            serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        assert_eq!(
            AppError::Json(json_err).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_share_generic_body() {
        // no internal detail may leak to the client
        assert_eq!(
            AppError::PasswordHash("params: N=17".to_string()).body(),
            "Server error"
        );

        let io_err = IoError::new(ErrorKind::PermissionDenied, "/var/lib/accounts");
        assert_eq!(AppError::Io(io_err).body(), "Server error");
    }

    #[test]
    fn test_not_found_body_is_message() {
        assert_eq!(AppError::NotFound("User not found.").body(), "User not found.");
        assert_eq!(
            AppError::MissingField("New password is required.").body(),
            "New password is required."
        );
    }

    #[test]
    fn test_unauthorized_into_response() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.contains("text/html"));
    }

    #[test]
    fn test_error_from_impls() {
        let io_err = IoError::new(ErrorKind::PermissionDenied, "Permission denied");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));

        let json_err: serde_json::Error =
            serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }
}
