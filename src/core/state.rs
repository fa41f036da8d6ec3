//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository, i service, la configurazione di sicurezza
//! e l'utility JWT. Le dipendenze vengono passate esplicitamente al costruttore.

use crate::core::{Config, JwtUtil, SecurityPolicy};
use crate::repositories::{
    CategoriaRepository, ClienteRepository, PagamentoRepository, PedidoRepository,
    ProdutoRepository,
};
use crate::services::CategoriaService;
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Service per le categorie
    pub categorias: CategoriaService,

    /// Repository per la gestione dei prodotti
    pub produto: ProdutoRepository,

    /// Repository per la gestione dei clienti
    pub cliente: ClienteRepository,

    /// Repository per la gestione dei pedidos
    pub pedido: PedidoRepository,

    /// Repository per la gerarchia dei pagamenti
    pub pagamento: PagamentoRepository,

    /// Firma e verifica dei token
    pub jwt: JwtUtil,

    /// Regole di accesso alle rotte
    pub security: SecurityPolicy,

    /// Costo di bcrypt per le nuove password
    pub bcrypt_cost: u32,

    /// Se true non viene inviato `X-Frame-Options` (profilo test)
    pub allow_frames: bool,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    /// * `config` - Configurazione caricata dall'ambiente
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            categorias: CategoriaService::new(CategoriaRepository::new(pool.clone())),
            produto: ProdutoRepository::new(pool.clone()),
            cliente: ClienteRepository::new(pool.clone()),
            pagamento: PagamentoRepository::new(pool.clone()),
            pedido: PedidoRepository::new(pool),
            jwt: JwtUtil::new(config.jwt_secret.clone(), config.jwt_expiration_secs),
            security: SecurityPolicy::standard(),
            bcrypt_cost: config.bcrypt_cost,
            allow_frames: config.is_test_profile(),
        }
    }
}
