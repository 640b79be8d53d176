// ============================
// crates/backend-lib/src/auth/session.rs
// ============================
//! Session integration: cookie-backed server-side sessions and the
//! authenticated-session guard.
//!
//! The authenticated user's name is stored in the session under
//! [`SESSION_USER_KEY`]; a request is authenticated iff that key holds a
//! non-empty name. Handlers that require it take an [`AuthUser`]
//! argument instead of repeating the check.
use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::{
    cookie::{time::Duration, Key},
    Expiry, MemoryStore, Session, SessionManagerLayer,
};
use tracing::warn;

use crate::config::Settings;
use crate::error::AppError;

/// Session key under which the logged-in user's name is stored.
pub const SESSION_USER_KEY: &str = "user";

/// Signed-cookie session layer type used by the router.
pub type SessionLayer = SessionManagerLayer<MemoryStore, tower_sessions::service::SignedCookie>;

/// Build the session layer from settings.
///
/// The cookie is signed with the configured secret (which must be at
/// least 64 bytes); without one a fresh key is generated, so sessions do
/// not survive a restart.
pub fn session_layer(settings: &Settings) -> anyhow::Result<SessionLayer> {
    let key = match settings.session_secret.as_deref() {
        Some(secret) => Key::try_from(secret.as_bytes())
            .map_err(|_| anyhow::anyhow!("session secret must be at least 64 bytes"))?,
        None => {
            warn!("no session secret configured, using an ephemeral signing key");
            Key::generate()
        },
    };

    let ttl = i64::try_from(settings.session_ttl_secs).unwrap_or(i64::MAX);

    Ok(SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(ttl)))
        .with_signed(key))
}

/// Read the logged-in user's name from the session, if any.
pub async fn current_user(session: &Session) -> Result<Option<String>, AppError> {
    Ok(session.get::<String>(SESSION_USER_KEY).await?)
}

/// Mark the session as authenticated for the given user.
pub async fn log_in(session: &Session, name: &str) -> Result<(), AppError> {
    session.insert(SESSION_USER_KEY, name).await?;
    Ok(())
}

/// Extractor for handlers that require an authenticated session.
///
/// Rejects with the 401 fragment when no user name is present.
pub struct AuthUser(pub String);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Unauthorized)?;

        match session.get::<String>(SESSION_USER_KEY).await {
            Ok(Some(name)) if !name.is_empty() => Ok(AuthUser(name)),
            Ok(_) => Err(AppError::Unauthorized),
            Err(e) => Err(AppError::Session(e)),
        }
    }
}
