//! Produto services - Endpoint pubblici di consultazione prodotti

use crate::core::{AppError, AppPath, AppQuery, AppState};
use crate::dtos::{ProdutoDTO, ProdutoSearchQuery};
use crate::repositories::Read;
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state))]
pub async fn search_produtos(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<ProdutoSearchQuery>, // /produtos?nome=...&categorias=1,2
) -> Result<Json<Vec<ProdutoDTO>>, AppError> {
    debug!("Searching produtos");
    let produtos = state
        .produto
        .search(params.nome.as_deref(), &params.categoria_ids())
        .await?;
    info!("Found {} produtos matching search criteria", produtos.len());
    Ok(Json(produtos.into_iter().map(ProdutoDTO::from).collect()))
}

#[instrument(skip(state), fields(produto_id = %id))]
pub async fn get_produto(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ProdutoDTO>, AppError> {
    debug!("Fetching produto by ID");
    match state.produto.read(&id).await? {
        Some(produto) => Ok(Json(ProdutoDTO::from(produto))),
        None => {
            warn!("Produto not found");
            Err(AppError::not_found("Objeto não encontrado")
                .with_details(format!("Id: {}, Tipo: Produto", id)))
        }
    }
}
