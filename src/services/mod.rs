//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni sotto-modulo gestisce gli endpoint di una risorsa.

pub mod auth;
pub mod categoria;
pub mod cliente;
pub mod pedido;
pub mod produto;

// Re-exports per facilitare l'import
pub use auth::{login, refresh_token};
pub use categoria::{
    CategoriaService, delete_categoria, get_categoria, insert_categoria, list_categorias,
};
pub use cliente::{get_cliente, insert_cliente, list_clientes};
pub use pedido::{get_pagamento, get_pedido, insert_pedido, list_my_pedidos};
pub use produto::{get_produto, search_produtos};

use crate::core::AppError;

/// Fallback per le rotte inesistenti
pub async fn not_found() -> AppError {
    AppError::not_found("Recurso não encontrado")
}
