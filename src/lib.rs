//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione.
///
/// L'ultimo layer aggiunto è il più esterno: CORS, poi charset UTF-8,
/// header di sicurezza, autorizzazione JWT e infine il controllo di accesso.
pub fn create_router(state: Arc<AppState>) -> Router {
    use crate::core::security::{cors_layer, force_utf8_middleware, security_headers_middleware};
    use crate::core::{access_control_middleware, authorization_middleware};

    Router::new()
        .merge(configure_auth_routes())
        .nest("/categorias", configure_categoria_routes())
        .nest("/produtos", configure_produto_routes())
        .nest("/clientes", configure_cliente_routes())
        .nest("/pedidos", configure_pedido_routes())
        .route("/pagamentos/{id}", get(services::get_pagamento))
        .fallback(services::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            access_control_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            authorization_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(middleware::from_fn(force_utf8_middleware))
        .layer(cors_layer())
        .with_state(state)
}

/// Configura le routes di autenticazione (login, refresh del token)
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/login", post(login))
        .route("/auth/refresh_token", post(refresh_token))
}

fn configure_categoria_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/", get(list_categorias).post(insert_categoria))
        .route("/{id}", get(get_categoria).delete(delete_categoria))
}

fn configure_produto_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/", get(search_produtos))
        .route("/{id}", get(get_produto))
}

fn configure_cliente_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/", get(list_clientes).post(insert_cliente))
        .route("/{id}", get(get_cliente))
}

fn configure_pedido_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/", get(list_my_pedidos).post(insert_pedido))
        .route("/{id}", get(get_pedido))
}
