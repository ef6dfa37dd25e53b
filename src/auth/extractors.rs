use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::auth::{CurrentInstructor, decode_jwt};
use crate::error::AppError;
use crate::state::AppState;

/// Pulls the bearer token out of `Authorization` and validates it. Any
/// failure is a plain 401.
impl FromRequestParts<AppState> for CurrentInstructor {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::Unauthorized)?;

        decode_jwt(&state.config.auth, bearer.token())
    }
}
