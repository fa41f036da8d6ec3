//! Enumerazioni - Tipi enumerati utilizzati nelle entità
//!
//! Nel database vengono salvati come codice intero, verso il client
//! viaggiano come nome della variante.

use serde::{Deserialize, Serialize};

// ********************* ENUMERAZIONI UTILI **********************//

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoPagamento {
    Pendente,
    Quitado,
    Cancelado,
}

impl EstadoPagamento {
    pub fn cod(&self) -> i32 {
        match self {
            Self::Pendente => 1,
            Self::Quitado => 2,
            Self::Cancelado => 3,
        }
    }

    /// Decodifica un codice salvato. Codici sconosciuti (o assenti) danno `None`.
    pub fn to_enum(cod: Option<i32>) -> Option<Self> {
        match cod? {
            1 => Some(Self::Pendente),
            2 => Some(Self::Quitado),
            3 => Some(Self::Cancelado),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoCliente {
    PessoaFisica,
    PessoaJuridica,
}

impl TipoCliente {
    pub fn to_enum(cod: Option<i32>) -> Option<Self> {
        match cod? {
            1 => Some(Self::PessoaFisica),
            2 => Some(Self::PessoaJuridica),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Perfil {
    Admin,
    Cliente,
}

impl Perfil {
    pub fn cod(&self) -> i32 {
        match self {
            Self::Admin => 1,
            Self::Cliente => 2,
        }
    }

    /// Nome dell'authority, nel formato `ROLE_*`
    pub fn descricao(&self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::Cliente => "ROLE_CLIENTE",
        }
    }

    pub fn to_enum(cod: Option<i32>) -> Option<Self> {
        match cod? {
            1 => Some(Self::Admin),
            2 => Some(Self::Cliente),
            _ => None,
        }
    }
}
