use crate::core::{AppError, AppState};
use crate::entities::{Cliente, Perfil};
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

const BEARER_PREFIX: &str = "Bearer ";

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // email del cliente
    pub exp: usize,  // Expiry time of the token
    pub iat: usize,  // Issued at time of the token
}

/// Firma e verifica dei token (HS512, subject = email)
#[derive(Clone)]
pub struct JwtUtil {
    secret: String,
    expiration: Duration,
}

impl JwtUtil {
    pub fn new(secret: impl Into<String>, expiration_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration: Duration::seconds(expiration_secs),
        }
    }

    #[instrument(skip(self))]
    pub fn generate_token(&self, email: &str) -> Result<String, AppError> {
        debug!("Encoding JWT token");
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            exp: (now + self.expiration).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map(|token| {
            info!("JWT token encoded successfully");
            token
        })
        .map_err(|e| {
            error!("Failed to encode JWT token: {:?}", e);
            AppError::internal_server_error("Error in encoding jwt token")
        })
    }

    /// Verifica firma e scadenza; `None` se il token non è valido
    #[instrument(skip(self, token))]
    pub fn valid_claims(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS512),
        )
        .map(|data| data.claims)
        .map_err(|e| debug!("Rejected JWT token: {:?}", e))
        .ok()
    }

    pub fn get_username(&self, token: &str) -> Option<String> {
        self.valid_claims(token).map(|claims| claims.sub)
    }
}

/// Principal autenticato, disponibile negli handler tramite `Extension<UserSS>`
#[derive(Debug, Clone, PartialEq)]
pub struct UserSS {
    pub id: i32,
    pub email: String,
    pub perfis: Vec<Perfil>,
}

impl UserSS {
    pub fn has_role(&self, perfil: Perfil) -> bool {
        self.perfis.contains(&perfil)
    }
}

impl From<Cliente> for UserSS {
    fn from(value: Cliente) -> Self {
        Self {
            id: value.id,
            email: value.email,
            perfis: value.perfis,
        }
    }
}

/// Estrae il token da un header `Authorization: Bearer <token>`
pub fn bearer_token(value: &str) -> Option<&str> {
    value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Primo stadio dell'autenticazione.
/// Senza header la richiesta prosegue anonima (decide poi l'access control);
/// con un token non valido viene respinta subito.
#[instrument(skip(state, req, next))]
pub async fn authorization_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    let token = match req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
    {
        Some(token) => token.to_string(),
        None => {
            debug!("No bearer token, continuing anonymously");
            return Ok(next.run(req).await);
        }
    };

    let email = state.jwt.get_username(&token).ok_or_else(|| {
        warn!("Invalid or expired JWT token");
        AppError::unauthorized("Token inválido")
    })?;

    // Fetch the principal and its profiles from the database
    let current_user = match state.cliente.find_by_email(&email).await? {
        Some(cliente) => UserSS::from(cliente),
        None => {
            warn!("Token subject not found in database: {}", email);
            return Err(AppError::unauthorized("Token inválido"));
        }
    };
    info!("User authenticated: {}", current_user.email);

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

/// Verifica che il principal abbia il perfil richiesto
pub fn require_role(user: &UserSS, perfil: Perfil) -> Result<(), AppError> {
    if !user.has_role(perfil) {
        warn!("User {} lacks {}", user.email, perfil.descricao());
        return Err(AppError::forbidden("Acesso negado"));
    }
    Ok(())
}

/// Il principal può accedere alle risorse del cliente `cliente_id`?
pub fn require_self_or_admin(user: &UserSS, cliente_id: i32) -> Result<(), AppError> {
    if user.id != cliente_id && !user.has_role(Perfil::Admin) {
        warn!("User {} tried to access resources of cliente {}", user.email, cliente_id);
        return Err(AppError::forbidden("Acesso negado"));
    }
    Ok(())
}
