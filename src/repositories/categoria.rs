//! CategoriaRepository - Repository per la gestione delle categorie

use super::{Create, Delete, Read, ReadAll};
use crate::dtos::CreateCategoriaDTO;
use crate::entities::Categoria;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

pub struct CategoriaRepository {
    connection_pool: SqlitePool,
}

impl CategoriaRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Categoria, CreateCategoriaDTO> for CategoriaRepository {
    #[instrument(skip(self, data), fields(nome = %data.nome))]
    async fn create(&self, data: &CreateCategoriaDTO) -> Result<Categoria, Error> {
        debug!("Creating new categoria");
        let result = sqlx::query("INSERT INTO categoria (nome) VALUES (?)")
            .bind(&data.nome)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid() as i32;
        info!("Categoria created with id {}", new_id);

        Ok(Categoria {
            id: new_id,
            nome: data.nome.clone(),
        })
    }
}

impl Read<Categoria, i32> for CategoriaRepository {
    #[instrument(skip(self), fields(categoria_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Categoria>, Error> {
        debug!("Reading categoria by id");
        sqlx::query_as::<_, Categoria>("SELECT id, nome FROM categoria WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl ReadAll<Categoria> for CategoriaRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Categoria>, Error> {
        debug!("Reading all categorias");
        sqlx::query_as::<_, Categoria>("SELECT id, nome FROM categoria ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Delete<i32> for CategoriaRepository {
    /// Fallisce con un errore di vincolo se esistono prodotti della categoria
    #[instrument(skip(self), fields(categoria_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting categoria");
        sqlx::query("DELETE FROM categoria WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        info!("Categoria deleted successfully");
        Ok(())
    }
}
