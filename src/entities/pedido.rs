//! Pedido entity - Entità ordine, proprietaria del pagamento

use super::enums::EstadoPagamento;
use super::pagamento::{Pagamento, TipoPagamento};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    pub id: i32,
    #[serde(serialize_with = "instante_br")]
    pub instante: DateTime<Utc>,
    pub cliente_id: i32,
    pagamento: Option<Pagamento>,
}

impl Pedido {
    pub fn new(id: i32, instante: DateTime<Utc>, cliente_id: i32) -> Self {
        Self {
            id,
            instante,
            cliente_id,
            pagamento: None,
        }
    }

    pub fn pagamento(&self) -> Option<&Pagamento> {
        self.pagamento.as_ref()
    }

    /// Associa un pagamento al pedido. L'identità del pagamento è sempre quella del pedido.
    pub fn set_pagamento(
        &mut self,
        estado: Option<EstadoPagamento>,
        tipo: TipoPagamento,
    ) -> &mut Pagamento {
        self.pagamento.insert(Pagamento::new(self.id, estado, tipo))
    }

    /// Aggancia un pagamento già persistito; scartato se appartiene a un altro pedido
    pub(crate) fn attach_pagamento(&mut self, pagamento: Pagamento) -> bool {
        if pagamento.pedido_id() != self.id {
            return false;
        }
        self.pagamento = Some(pagamento);
        true
    }
}

fn instante_br<S: Serializer>(instante: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&instante.format("%d/%m/%Y %H:%M").to_string())
}
