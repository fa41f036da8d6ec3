//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autenticazione e JWT
//! - Regole di sicurezza e filtri HTTP
//! - Configurazione
//! - Gestione errori ed extractor
//! - Stato applicazione

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod security;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{Claims, JwtUtil, UserSS, authorization_middleware, require_role, require_self_or_admin};
pub use config::Config;
pub use error::AppError;
pub use extract::{AppJson, AppPath, AppQuery};
pub use security::{Access, AccessRule, SecurityPolicy, access_control_middleware};
pub use state::AppState;
