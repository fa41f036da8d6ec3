//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//!
//! Le query sono scritte con `sqlx::query` / `sqlx::query_as` a runtime e mappate
//! sulle entità tramite `FromRow`: non serve un database raggiungibile in compilazione.
//! I risultati di `fetch_optional` diventano `Ok(None)` quando la riga non esiste,
//! così il "non trovato" non è mai un errore a questo livello.

// ************************* MODULI REPOSITORY ************************* //

pub mod categoria;
pub mod cliente;
pub mod pagamento;
pub mod pedido;
pub mod produto;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use categoria::CategoriaRepository;
pub use cliente::ClienteRepository;
pub use pagamento::PagamentoRepository;
pub use pedido::PedidoRepository;
pub use produto::ProdutoRepository;
