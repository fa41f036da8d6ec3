#![allow(dead_code)]

use axum_test::TestServer;
use axum_test::http::HeaderName;
use cursomc::core::{AppState, Config, JwtUtil};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "segredodetesteparaassinarostokens";

pub const ADMIN_EMAIL: &str = "ana@cursomc.com";
pub const CLIENTE_EMAIL: &str = "maria@gmail.com";

/// Configurazione dei test: profilo `test`, bcrypt al costo minimo
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiration_secs: 3600,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        max_connections: 1,
        bcrypt_cost: 4,
        app_env: "test".to_string(),
    }
}

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool SQLite creato da `#[sqlx::test]`
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, &test_config()))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = cursomc::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un token valido per `email`, firmato con il segreto dei test
pub fn create_test_jwt(email: &str) -> String {
    JwtUtil::new(TEST_JWT_SECRET, 3600)
        .generate_token(email)
        .expect("Failed to create JWT token")
}

/// Genera un token già scaduto
pub fn create_expired_jwt(email: &str) -> String {
    JwtUtil::new(TEST_JWT_SECRET, -3600)
        .generate_token(email)
        .expect("Failed to create JWT token")
}

pub fn authorization() -> HeaderName {
    HeaderName::from_static("authorization")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Body di registrazione valido (CPF corretto)
pub fn new_cliente_body(email: &str, senha: &str) -> serde_json::Value {
    json!({
        "nome": "Joana Pereira",
        "email": email,
        "cpfOuCnpj": "52998224725",
        "tipo": 1,
        "senha": senha
    })
}
