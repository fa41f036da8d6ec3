//! Pedido DTOs - Data Transfer Objects per ordini

use super::FieldMessage;
use crate::entities::{EstadoPagamento, TipoPagamento};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body di `POST /pedidos`: il client sceglie solo il metodo di pagamento,
/// il resto viene deciso dal server
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreatePedidoDTO {
    pub pagamento: TipoPagamento,
}

impl CreatePedidoDTO {
    pub fn check_pagamento(&self) -> Vec<FieldMessage> {
        match &self.pagamento {
            TipoPagamento::ComCartao(c) if c.numero_de_parcelas < 1 => vec![FieldMessage::new(
                "numeroDeParcelas",
                "O número de parcelas deve ser maior que zero",
            )],
            _ => Vec::new(),
        }
    }
}

/// DTO per l'inserimento a database di un pedido con il suo pagamento
#[derive(Debug, Clone)]
pub struct InsertPedidoDTO {
    pub cliente_id: i32,
    pub instante: DateTime<Utc>,
    pub estado: EstadoPagamento,
    pub pagamento: TipoPagamento,
}
