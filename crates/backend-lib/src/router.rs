// ============================
// crates/backend-lib/src/router.rs
// ============================
//! The single route table for pages, account actions and the JSON API.
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::SessionLayer;
use crate::handlers::{account, api, pages};
use crate::AppState;

/// Create the application router.
pub fn create_router(state: AppState, session_layer: SessionLayer) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::login_page))
        .route("/signup", get(pages::signup_page).post(account::signup))
        .route("/login", post(account::login))
        .route("/home", get(pages::home_page))
        .route("/change-password", post(account::change_password))
        .route("/delete-account", post(account::delete_account))
        .route("/logout", post(account::logout))
        .route("/api/users", get(api::list_users).post(api::create_user))
        .route(
            "/api/users/{name}",
            get(api::get_user).delete(api::delete_user),
        )
        .route("/api/users/{name}/password", put(api::update_password))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
