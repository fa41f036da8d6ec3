//! Categoria entity - Entità categoria

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow)]
pub struct Categoria {
    pub id: i32,
    pub nome: String,
}
