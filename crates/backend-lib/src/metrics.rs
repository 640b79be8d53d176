// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const USER_SIGNED_UP: &str = "user.signed_up";
pub const USER_LOGGED_IN: &str = "user.logged_in";
pub const USER_DELETED: &str = "user.deleted";
pub const SESSION_ENDED: &str = "session.ended";
pub const LOGIN_REJECTED: &str = "login.rejected";
