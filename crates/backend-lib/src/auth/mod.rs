// ============================
// crates/backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod password;
pub mod session;

pub use password::{hash_password, verify_password};
pub use session::{current_user, log_in, session_layer, AuthUser, SessionLayer, SESSION_USER_KEY};
