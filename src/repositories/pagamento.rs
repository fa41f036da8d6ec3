//! PagamentoRepository - Repository per la gerarchia dei pagamenti
//!
//! Ereditarietà joined: la riga base in `pagamento` (chiave = id del pedido)
//! più una riga nella tabella della variante. In lettura si fa LEFT JOIN su
//! tutte le varianti e si sceglie quella presente.

use super::Read;
use crate::entities::{Pagamento, PagamentoComBoleto, PagamentoComCartao, TipoPagamento};
use chrono::NaiveDate;
use sqlx::{Error, Executor, FromRow, Sqlite, SqliteConnection, SqlitePool};
use tracing::{debug, instrument};

const SELECT_PAGAMENTO: &str = r#"
    SELECT
        p.pedido_id AS id,
        p.estado,
        b.pedido_id IS NOT NULL AS tem_boleto,
        b.data_vencimento,
        b.data_pagamento,
        c.numero_de_parcelas
    FROM pagamento p
    LEFT JOIN pagamento_com_boleto b ON b.pedido_id = p.pedido_id
    LEFT JOIN pagamento_com_cartao c ON c.pedido_id = p.pedido_id
    WHERE p.pedido_id = ?
"#;

#[derive(FromRow)]
struct PagamentoRow {
    id: i32,
    estado: Option<i32>,
    tem_boleto: i64,
    data_vencimento: Option<NaiveDate>,
    data_pagamento: Option<NaiveDate>,
    numero_de_parcelas: Option<i32>,
}

impl TryFrom<PagamentoRow> for Pagamento {
    type Error = Error;

    fn try_from(row: PagamentoRow) -> Result<Self, Self::Error> {
        let tipo = if row.tem_boleto != 0 {
            TipoPagamento::ComBoleto(PagamentoComBoleto {
                data_vencimento: row.data_vencimento,
                data_pagamento: row.data_pagamento,
            })
        } else if let Some(numero_de_parcelas) = row.numero_de_parcelas {
            TipoPagamento::ComCartao(PagamentoComCartao { numero_de_parcelas })
        } else {
            return Err(Error::Decode(
                format!("pagamento {} has no variant row", row.id).into(),
            ));
        };
        Ok(Pagamento::from_parts(row.id, row.estado, tipo))
    }
}

pub struct PagamentoRepository {
    connection_pool: SqlitePool,
}

impl PagamentoRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Lettura con qualsiasi executor (pool o transazione)
    pub(crate) async fn fetch<'e, E>(executor: E, pedido_id: i32) -> Result<Option<Pagamento>, Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, PagamentoRow>(SELECT_PAGAMENTO)
            .bind(pedido_id)
            .fetch_optional(executor)
            .await?
            .map(Pagamento::try_from)
            .transpose()
    }

    /// Scrive la riga base e quella della variante, dentro la transazione del pedido
    #[instrument(skip(conn, pagamento), fields(pedido_id = pagamento.id(), tipo = pagamento.type_name()))]
    pub(crate) async fn insert(conn: &mut SqliteConnection, pagamento: &Pagamento) -> Result<(), Error> {
        debug!("Inserting pagamento");
        sqlx::query("INSERT INTO pagamento (pedido_id, estado) VALUES (?, ?)")
            .bind(pagamento.id())
            .bind(pagamento.estado_cod())
            .execute(&mut *conn)
            .await?;

        match &pagamento.tipo {
            TipoPagamento::ComBoleto(boleto) => {
                sqlx::query(
                    "INSERT INTO pagamento_com_boleto (pedido_id, data_vencimento, data_pagamento) VALUES (?, ?, ?)",
                )
                .bind(pagamento.id())
                .bind(boleto.data_vencimento)
                .bind(boleto.data_pagamento)
                .execute(&mut *conn)
                .await?;
            }
            TipoPagamento::ComCartao(cartao) => {
                sqlx::query(
                    "INSERT INTO pagamento_com_cartao (pedido_id, numero_de_parcelas) VALUES (?, ?)",
                )
                .bind(pagamento.id())
                .bind(cartao.numero_de_parcelas)
                .execute(&mut *conn)
                .await?;
            }
        }
        Ok(())
    }
}

impl Read<Pagamento, i32> for PagamentoRepository {
    #[instrument(skip(self), fields(pedido_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Pagamento>, Error> {
        debug!("Reading pagamento by pedido id");
        Self::fetch(&self.connection_pool, *id).await
    }
}
