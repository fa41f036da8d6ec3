//! Produto DTOs - Data Transfer Objects per prodotti

use crate::entities::Produto;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ProdutoDTO {
    pub id: Option<i32>,
    pub nome: Option<String>,
    pub preco: Option<f64>,
}

impl From<Produto> for ProdutoDTO {
    fn from(value: Produto) -> Self {
        Self {
            id: Some(value.id),
            nome: Some(value.nome),
            preco: Some(value.preco),
        }
    }
}
