use axum::{Form, Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{TOKEN_TYPE, generate_jwt, verify_password};
use crate::db::repository;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /token
///
/// Exchanges a form-encoded username/password for a bearer token. Unknown
/// users and wrong passwords get the same 401. Expiry is stamped from the
/// system clock because that is what validation checks it against.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, AppError> {
    let credential = repository::find_instructor(&state.db, &form.username).await?;

    let verified = credential
        .as_ref()
        .is_some_and(|c| verify_password(&form.password, &c.password_hash));
    if !verified {
        warn!("failed login for {:?}", form.username);
        return Err(AppError::Unauthorized);
    }

    let access_token = generate_jwt(&state.config.auth, &form.username, Utc::now())?;
    info!("issued token for {}", form.username);

    Ok(Json(TokenResponse {
        access_token,
        token_type: TOKEN_TYPE.to_string(),
    }))
}
