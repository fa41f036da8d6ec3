//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database; la gerarchia dei pagamenti
//! usa una tabella base più una tabella per variante.

pub mod categoria;
pub mod cliente;
pub mod enums;
pub mod pagamento;
pub mod pedido;
pub mod produto;

// Re-exports per facilitare l'import
pub use categoria::Categoria;
pub use cliente::Cliente;
pub use enums::{EstadoPagamento, Perfil, TipoCliente};
pub use pagamento::{Pagamento, PagamentoComBoleto, PagamentoComCartao, TipoPagamento};
pub use pedido::Pedido;
pub use produto::Produto;
