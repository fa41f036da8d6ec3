//! Categoria DTOs - Data Transfer Objects per categorie

use crate::entities::Categoria;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug)]
pub struct CategoriaDTO {
    pub id: Option<i32>,
    pub nome: Option<String>,
}

impl From<Categoria> for CategoriaDTO {
    fn from(value: Categoria) -> Self {
        Self {
            id: Some(value.id),
            nome: Some(value.nome),
        }
    }
}

/// DTO per creare una nuova categoria (senza id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateCategoriaDTO {
    #[validate(length(min = 5, max = 80, message = "O tamanho deve ser entre 5 e 80 caracteres"))]
    pub nome: String,
}
