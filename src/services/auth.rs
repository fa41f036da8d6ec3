//! Auth services - Login e rinnovo del token

use crate::core::{AppError, AppJson, AppState, UserSS};
use crate::dtos::CredenciaisDTO;
use axum::{
    Extension,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<CredenciaisDTO>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Cercare il cliente per email
    // 2. Verificare la password contro l'hash bcrypt
    // 3. Stesso 401 in entrambi i casi, senza dire quale parte è sbagliata
    // 4. Token nell'header Authorization, nessun cookie
    let cliente = state
        .cliente
        .find_by_email(&body.email)
        .await?
        .filter(|c| c.verify_password(&body.senha))
        .ok_or_else(|| {
            warn!("Login failed");
            AppError::unauthorized("Email ou senha inválidos")
        })?;

    let token = state.jwt.generate_token(&cliente.email)?;
    info!("Cliente {} logged in", cliente.id);
    Ok((StatusCode::OK, token_headers(&token)?))
}

#[instrument(skip(state, current_user), fields(user = %current_user.email))]
pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserSS>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.jwt.generate_token(&current_user.email)?;
    Ok((StatusCode::NO_CONTENT, token_headers(&token)?))
}

fn token_headers(token: &str) -> Result<HeaderMap, AppError> {
    let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| AppError::internal_server_error("Error in encoding jwt token"))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, bearer);
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("Authorization"),
    );
    Ok(headers)
}
