//! ProdutoRepository - Repository per la gestione dei prodotti

use super::Read;
use crate::entities::Produto;
use sqlx::{Error, QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, info, instrument};

pub struct ProdutoRepository {
    connection_pool: SqlitePool,
}

impl ProdutoRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Ricerca per nome (contiene) e categorie (almeno una).
    /// Filtri assenti o vuoti non restringono il risultato.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        nome: Option<&str>,
        categoria_ids: &[i32],
    ) -> Result<Vec<Produto>, Error> {
        debug!("Searching produtos");
        // Build dynamic query using QueryBuilder (idiomatic SQLx way)
        let mut query_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT DISTINCT p.id, p.nome, p.preco FROM produto p");

        if !categoria_ids.is_empty() {
            query_builder.push(" INNER JOIN produto_categoria pc ON pc.produto_id = p.id");
        }
        query_builder.push(" WHERE 1 = 1");

        if let Some(nome) = nome.filter(|n| !n.is_empty()) {
            query_builder.push(" AND p.nome LIKE ");
            query_builder.push_bind(format!("%{}%", nome));
        }

        if !categoria_ids.is_empty() {
            query_builder.push(" AND pc.categoria_id IN (");
            let mut separated = query_builder.separated(", ");
            for id in categoria_ids {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");
        }
        query_builder.push(" ORDER BY p.nome");

        let produtos = query_builder
            .build_query_as::<Produto>()
            .fetch_all(&self.connection_pool)
            .await?;

        info!("Found {} produtos", produtos.len());
        Ok(produtos)
    }
}

impl Read<Produto, i32> for ProdutoRepository {
    #[instrument(skip(self), fields(produto_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Produto>, Error> {
        debug!("Reading produto by id");
        sqlx::query_as::<_, Produto>("SELECT id, nome, preco FROM produto WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
