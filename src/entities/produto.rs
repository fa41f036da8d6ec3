//! Produto entity - Entità prodotto

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow)]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub preco: f64,
}
