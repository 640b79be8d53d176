// ============================
// crates/backend-lib/src/handlers/account.rs
// ============================
//! Account handlers: signup, login, change-password, delete-account and
//! logout. User-visible texts and status codes follow the documented
//! contract, including its quirks (duplicate signup and failed login
//! answer 200, successful signup/login answer 201).
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use metrics::counter;
use tower_sessions::Session;
use tracing::{error, info};

use super::render;
use super::redirect_found;
use crate::auth::{hash_password, log_in, verify_password, AuthUser};
use crate::error::AppError;
use crate::metrics as metric_keys;
use crate::views::HomeView;
use crate::AppState;
use accounts_common::{ChangePassword, Credentials, UserRecord};

const PASSWORD_CHANGED_FRAGMENT: &str = "<p>Password successfully changed.</p>\n\
     <p><a href=\"/home\">Go back to the homepage</a></p>";

const OLD_PASSWORD_INCORRECT_FRAGMENT: &str = "<p>Old password is incorrect.</p>\n\
     <p><a href=\"/home\">Go back to the homepage</a></p>";

const SERVER_ERROR_FRAGMENT: &str = "<p>Server error.</p>\n\
     <p><a href=\"/home\">Go back to the homepage</a></p>";

const ACCOUNT_DELETED_FRAGMENT: &str = "<p>Your account has been successfully deleted.</p>\n\
     <p><a href=\"/\">Go back to the login page</a></p>";

/// `POST /signup`
///
/// Existence check and insert are two separate store operations, so two
/// concurrent signups for the same unused name can both land.
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(creds): Form<Credentials>,
) -> Result<Response, AppError> {
    if state.store.find(&creds.name).await?.is_some() {
        return Ok("Username already exists. Please choose a different username.".into_response());
    }

    let hash = hash_password(&creds.password).map_err(|e| AppError::PasswordHash(e.to_string()))?;
    state
        .store
        .insert(UserRecord {
            name: creds.name.clone(),
            password: hash,
        })
        .await?;

    log_in(&session, &creds.name).await?;
    counter!(metric_keys::USER_SIGNED_UP).increment(1);
    info!(name = %creds.name, "user signed up");

    Ok((StatusCode::CREATED, render(HomeView { name: &creds.name })?).into_response())
}

/// `POST /login`
///
/// The same "Incorrect password" text answers both an unknown name and a
/// wrong password, so the response does not reveal which it was.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(creds): Form<Credentials>,
) -> Result<Response, AppError> {
    let record = match state.store.find(&creds.name).await {
        Ok(record) => record,
        Err(e) => {
            error!(error = %e, "login lookup failed");
            // historical contract: error text with the default 200 status
            return Ok("Wrong details".into_response());
        },
    };

    match record {
        Some(user) if verify_password(&user.password, &creds.password) => {
            log_in(&session, &creds.name).await?;
            counter!(metric_keys::USER_LOGGED_IN).increment(1);
            info!(name = %creds.name, "user logged in");

            Ok((StatusCode::CREATED, render(HomeView { name: &creds.name })?).into_response())
        },
        _ => {
            counter!(metric_keys::LOGIN_REJECTED).increment(1);
            Ok("Incorrect password".into_response())
        },
    }
}

/// `POST /change-password` — requires an authenticated session.
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(name): AuthUser,
    Form(body): Form<ChangePassword>,
) -> Response {
    match try_change_password(&state, &name, &body).await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "password change failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(SERVER_ERROR_FRAGMENT),
            )
                .into_response()
        },
    }
}

async fn try_change_password(
    state: &AppState,
    name: &str,
    body: &ChangePassword,
) -> Result<Response, AppError> {
    match state.store.find(name).await? {
        Some(user) if verify_password(&user.password, &body.old_password) => {
            let hash = hash_password(&body.new_password)
                .map_err(|e| AppError::PasswordHash(e.to_string()))?;
            state.store.update_password(name, &hash).await?;

            Ok(Html(PASSWORD_CHANGED_FRAGMENT).into_response())
        },
        _ => Ok((
            StatusCode::BAD_REQUEST,
            Html(OLD_PASSWORD_INCORRECT_FRAGMENT),
        )
            .into_response()),
    }
}

/// `POST /delete-account` — requires an authenticated session. The
/// session is destroyed with the record, so a later `GET /home` with the
/// same cookie redirects to login.
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
    AuthUser(name): AuthUser,
) -> Result<Response, AppError> {
    if state.store.delete(&name).await? {
        session.flush().await?;
        counter!(metric_keys::USER_DELETED).increment(1);
        info!(name = %name, "account deleted");

        Ok(Html(ACCOUNT_DELETED_FRAGMENT).into_response())
    } else {
        Ok((StatusCode::NOT_FOUND, "Account not found.").into_response())
    }
}

/// `POST /logout`
pub async fn logout(session: Session) -> Response {
    match session.flush().await {
        Ok(()) => {
            counter!(metric_keys::SESSION_ENDED).increment(1);
            redirect_found("/")
        },
        Err(e) => {
            error!(error = %e, "logout failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error logging out.").into_response()
        },
    }
}
