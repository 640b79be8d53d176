// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core library for the accounts service: a small session-based
//! signup/login web application with a parallel JSON API over the same
//! user records.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod store;
pub mod views;

use std::sync::Arc;

use crate::config::Settings;
use crate::store::UserStore;

/// Application state shared across all handlers.
///
/// The user store is held as a trait object so the binary can wire the
/// flat-file backend while tests inject an in-memory one.
#[derive(Clone)]
pub struct AppState {
    /// User store backend
    pub store: Arc<dyn UserStore>,
    /// Settings
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn UserStore>, settings: Settings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }
}
