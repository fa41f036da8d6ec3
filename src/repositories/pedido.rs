//! PedidoRepository - Repository per la gestione degli ordini
//!
//! Un pedido viene sempre letto e scritto insieme al suo pagamento.

use super::{Create, PagamentoRepository, Read};
use crate::dtos::InsertPedidoDTO;
use crate::entities::Pedido;
use chrono::{DateTime, Utc};
use sqlx::{Error, FromRow, SqlitePool};
use tracing::{debug, info, instrument, warn};

#[derive(FromRow)]
struct PedidoRow {
    id: i32,
    instante: DateTime<Utc>,
    cliente_id: i32,
}

pub struct PedidoRepository {
    connection_pool: SqlitePool,
}

impl PedidoRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    async fn with_pagamento(&self, row: PedidoRow) -> Result<Pedido, Error> {
        let mut pedido = Pedido::new(row.id, row.instante, row.cliente_id);
        if let Some(pagamento) = PagamentoRepository::fetch(&self.connection_pool, row.id).await? {
            pedido.attach_pagamento(pagamento);
        } else {
            warn!("Pedido {} has no pagamento", row.id);
        }
        Ok(pedido)
    }

    /// Ordini di un cliente, dal più recente
    #[instrument(skip(self), fields(cliente_id = %cliente_id))]
    pub async fn find_many_by_cliente_id(&self, cliente_id: &i32) -> Result<Vec<Pedido>, Error> {
        debug!("Finding pedidos of cliente");
        let rows = sqlx::query_as::<_, PedidoRow>(
            "SELECT id, instante, cliente_id FROM pedido WHERE cliente_id = ? ORDER BY instante DESC",
        )
        .bind(cliente_id)
        .fetch_all(&self.connection_pool)
        .await?;

        let mut pedidos = Vec::with_capacity(rows.len());
        for row in rows {
            pedidos.push(self.with_pagamento(row).await?);
        }
        info!("Found {} pedidos", pedidos.len());
        Ok(pedidos)
    }
}

impl Create<Pedido, InsertPedidoDTO> for PedidoRepository {
    /// Pedido e pagamento nella stessa transazione; il pagamento prende l'id del pedido
    #[instrument(skip(self, data), fields(cliente_id = %data.cliente_id))]
    async fn create(&self, data: &InsertPedidoDTO) -> Result<Pedido, Error> {
        debug!("Creating new pedido");
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query("INSERT INTO pedido (instante, cliente_id) VALUES (?, ?)")
            .bind(data.instante)
            .bind(data.cliente_id)
            .execute(&mut *tx)
            .await?;
        let new_id = result.last_insert_rowid() as i32;

        let mut pedido = Pedido::new(new_id, data.instante, data.cliente_id);
        let pagamento = pedido.set_pagamento(Some(data.estado), data.pagamento.clone());
        PagamentoRepository::insert(&mut *tx, pagamento).await?;

        tx.commit().await?;
        info!("Pedido created with id {}", new_id);
        Ok(pedido)
    }
}

impl Read<Pedido, i32> for PedidoRepository {
    #[instrument(skip(self), fields(pedido_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Pedido>, Error> {
        debug!("Reading pedido by id");
        let row = sqlx::query_as::<_, PedidoRow>(
            "SELECT id, instante, cliente_id FROM pedido WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.with_pagamento(row).await?)),
            None => Ok(None),
        }
    }
}
