//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod categoria;
pub mod cliente;
pub mod field_message;
pub mod pedido;
pub mod produto;
pub mod query;

// Re-exports per facilitare l'import
pub use categoria::{CategoriaDTO, CreateCategoriaDTO};
pub use cliente::{ClienteDTO, CreateClienteDTO, CredenciaisDTO};
pub use field_message::FieldMessage;
pub use pedido::{CreatePedidoDTO, InsertPedidoDTO};
pub use produto::ProdutoDTO;
pub use query::ProdutoSearchQuery;
