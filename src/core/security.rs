//! Security configuration - Regole di accesso e filtri HTTP trasversali
//!
//! Le regole sono una lista ordinata `(metodo, pattern, accesso)`: vince la prima
//! che corrisponde, tutto ciò che non corrisponde richiede autenticazione.

use crate::core::{AppError, AppState, UserSS};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, Method, Response, header},
    middleware::Next,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, instrument, warn};

/// Rotte libere solo in scrittura
const PUBLIC_MATCHERS_POST: &[&str] = &["/clientes/**", "/auth/forgot/**", "/login"];

/// Rotte libere solo in lettura
const PUBLIC_MATCHERS_GET: &[&str] = &["/produtos/**", "/categorias/**"];

/// Rotte libere per qualsiasi metodo
const PUBLIC_MATCHERS: &[&str] = &["/h2-console/**"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

#[derive(Debug, Clone)]
pub struct AccessRule {
    /// `None` = qualsiasi metodo
    pub method: Option<Method>,
    pub pattern: &'static str,
    pub access: Access,
}

#[derive(Debug, Clone)]
pub struct SecurityPolicy {
    rules: Vec<AccessRule>,
}

impl SecurityPolicy {
    pub fn new(rules: Vec<AccessRule>) -> Self {
        Self { rules }
    }

    /// POST allow-list, poi GET allow-list, poi rotte completamente aperte
    pub fn standard() -> Self {
        let post = PUBLIC_MATCHERS_POST.iter().map(|&pattern| AccessRule {
            method: Some(Method::POST),
            pattern,
            access: Access::Public,
        });
        let get = PUBLIC_MATCHERS_GET.iter().map(|&pattern| AccessRule {
            method: Some(Method::GET),
            pattern,
            access: Access::Public,
        });
        let open = PUBLIC_MATCHERS.iter().map(|&pattern| AccessRule {
            method: None,
            pattern,
            access: Access::Public,
        });
        Self::new(post.chain(get).chain(open).collect())
    }

    /// First match wins; nessuna regola = autenticazione richiesta
    pub fn decide(&self, method: &Method, path: &str) -> Access {
        self.rules
            .iter()
            .find(|rule| {
                rule.method.as_ref().is_none_or(|m| m == method) && path_matches(rule.pattern, path)
            })
            .map(|rule| rule.access)
            .unwrap_or(Access::Authenticated)
    }
}

/// Pattern in stile ant: `**` = zero o più segmenti finali, `*` = un segmento
pub fn path_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (Some("**"), _) => return true,
            (Some("*"), Some(_)) => continue,
            (Some(p), Some(s)) if p == s => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Secondo stadio dell'autenticazione: le rotte protette senza identità vengono respinte qui
#[instrument(skip(state, req, next), fields(method = %req.method(), path = %req.uri().path()))]
pub async fn access_control_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    let access = state.security.decide(req.method(), req.uri().path());
    if access == Access::Authenticated && req.extensions().get::<UserSS>().is_none() {
        warn!("Anonymous request to protected route");
        return Err(AppError::unauthorized("Não autorizado"));
    }
    debug!("Access granted ({:?})", access);
    Ok(next.run(req).await)
}

/// Header di sicurezza; nel profilo `test` il framing resta permesso
pub async fn security_headers_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response<Body> {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    if !state.allow_frames {
        headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    }
    response
}

/// Forza la codifica UTF-8 su ogni risposta testuale, sostituendo un eventuale charset diverso
pub async fn force_utf8_middleware(req: Request, next: Next) -> Response<Body> {
    let mut response = next.run(req).await;
    let forced = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .filter(|ct| is_textual(ct))
        .and_then(|ct| HeaderValue::from_str(&with_utf8_charset(ct)).ok());

    if let Some(value) = forced {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

/// Riscrive il content type togliendo ogni parametro `charset` e aggiungendo `charset=UTF-8`
fn with_utf8_charset(content_type: &str) -> String {
    let mut parts: Vec<&str> = content_type
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty() && !p.to_ascii_lowercase().starts_with("charset="))
        .collect();
    parts.push("charset=UTF-8");
    parts.join("; ")
}

fn is_textual(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.starts_with("text/") || ct.starts_with("application/json")
}

/// CORS permissivo su tutte le rotte, con l'header Authorization esposto al browser
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::POST])
        .allow_headers(Any)
        .expose_headers([header::AUTHORIZATION])
        .max_age(Duration::from_secs(1800))
}
