//! Pagamento entity - Gerarchia dei pagamenti
//!
//! La parte comune (id condiviso col pedido, stato) sta in [`Pagamento`],
//! la parte specifica del metodo di pagamento in [`TipoPagamento`].
//! In JSON le due parti vengono appiattite in un solo oggetto con il
//! discriminatore `@type`.

use super::enums::EstadoPagamento;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pagamento {
    // coincide sempre con l'id del pedido proprietario
    id: i32,
    #[serde(with = "codigo_estado", default)]
    estado_pagamento: Option<i32>,
    #[serde(flatten)]
    pub tipo: TipoPagamento,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "@type")]
pub enum TipoPagamento {
    #[serde(rename = "pagamentoComBoleto")]
    ComBoleto(PagamentoComBoleto),
    #[serde(rename = "pagamentoComCartao")]
    ComCartao(PagamentoComCartao),
}

/// Pagamento tramite bollettino bancario
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoComBoleto {
    #[serde(with = "data_br", default)]
    pub data_vencimento: Option<NaiveDate>,
    #[serde(with = "data_br", default)]
    pub data_pagamento: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoComCartao {
    pub numero_de_parcelas: i32,
}

impl Pagamento {
    /// Costruisce il pagamento di un pedido: l'id è quello del pedido stesso.
    /// Uso interno, dall'esterno si passa da `Pedido::set_pagamento`.
    pub(crate) fn new(pedido_id: i32, estado: Option<EstadoPagamento>, tipo: TipoPagamento) -> Self {
        Self {
            id: pedido_id,
            estado_pagamento: estado.map(|e| e.cod()),
            tipo,
        }
    }

    /// Ricostruisce un pagamento letto dal database, con il codice di stato grezzo
    pub(crate) fn from_parts(pedido_id: i32, estado_cod: Option<i32>, tipo: TipoPagamento) -> Self {
        Self {
            id: pedido_id,
            estado_pagamento: estado_cod,
            tipo,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn pedido_id(&self) -> i32 {
        self.id
    }

    pub fn estado(&self) -> Option<EstadoPagamento> {
        EstadoPagamento::to_enum(self.estado_pagamento)
    }

    /// Codice di stato così come va salvato
    pub fn estado_cod(&self) -> Option<i32> {
        self.estado_pagamento
    }

    /// Nome del discriminatore della variante
    pub fn type_name(&self) -> &'static str {
        match self.tipo {
            TipoPagamento::ComBoleto(_) => "pagamentoComBoleto",
            TipoPagamento::ComCartao(_) => "pagamentoComCartao",
        }
    }
}

impl PagamentoComBoleto {
    /// Un bollettino nuovo scade 7 giorni dopo l'ordine e non risulta ancora pagato
    pub fn preencher(&mut self, data_pedido: NaiveDate) {
        self.data_vencimento = data_pedido.checked_add_days(chrono::Days::new(7));
        self.data_pagamento = None;
    }
}

/// Lo stato viaggia come nome (`"PENDENTE"`), ma viene conservato come codice.
/// Un codice sconosciuto viene serializzato come `null`.
mod codigo_estado {
    use super::EstadoPagamento;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(cod: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error> {
        EstadoPagamento::to_enum(*cod).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
        Ok(Option::<EstadoPagamento>::deserialize(deserializer)?.map(|e| e.cod()))
    }
}

/// Date nel formato `dd/MM/yyyy`
pub(crate) mod data_br {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| NaiveDate::parse_from_str(&s, FORMAT).map_err(D::Error::custom))
            .transpose()
    }
}
