//! Query DTOs - Data Transfer Objects per query di ricerca

use serde::{Deserialize, Serialize};

/// DTO per query parameters di ricerca prodotti
/// `/produtos?nome=com&categorias=1,2`
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ProdutoSearchQuery {
    #[serde(default)]
    pub nome: Option<String>,
    // lista di id separati da virgola
    #[serde(default)]
    pub categorias: Option<String>,
}

impl ProdutoSearchQuery {
    /// Id delle categorie richieste; gli elementi non numerici vengono ignorati
    pub fn categoria_ids(&self) -> Vec<i32> {
        self.categorias
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(|s| s.trim().parse::<i32>().ok())
            .collect()
    }
}
