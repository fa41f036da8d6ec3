//! Categoria services - Service delle categorie e relativi endpoint HTTP

use crate::core::{AppError, AppJson, AppPath, AppState, UserSS, require_role};
use crate::dtos::{CategoriaDTO, CreateCategoriaDTO};
use crate::entities::{Categoria, Perfil};
use crate::repositories::{CategoriaRepository, Create, Delete, Read, ReadAll};
use axum::{
    Extension,
    extract::{Json, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Delega diretta al repository: "non trovato" è `None`, mai un errore
pub struct CategoriaService {
    repository: CategoriaRepository,
}

impl CategoriaService {
    pub fn new(repository: CategoriaRepository) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> Result<Vec<Categoria>, sqlx::Error> {
        self.repository.read_all().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Categoria>, sqlx::Error> {
        self.repository.read(&id).await
    }

    pub async fn insert(&self, data: &CreateCategoriaDTO) -> Result<Categoria, sqlx::Error> {
        self.repository.create(data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        self.repository.delete(&id).await
    }
}

#[instrument(skip(state))]
pub async fn list_categorias(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoriaDTO>>, AppError> {
    debug!("Listing categorias");
    let categorias = state.categorias.find_all().await?;
    info!("Found {} categorias", categorias.len());
    Ok(Json(categorias.into_iter().map(CategoriaDTO::from).collect()))
}

#[instrument(skip(state), fields(categoria_id = %id))]
pub async fn get_categoria(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<CategoriaDTO>, AppError> {
    debug!("Fetching categoria by ID");
    match state.categorias.find_by_id(id).await? {
        Some(categoria) => Ok(Json(CategoriaDTO::from(categoria))),
        None => {
            warn!("Categoria not found");
            Err(AppError::not_found("Objeto não encontrado")
                .with_details(format!("Id: {}, Tipo: Categoria", id)))
        }
    }
}

#[instrument(skip(state, current_user, body), fields(user = %current_user.email))]
pub async fn insert_categoria(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserSS>,
    AppJson(body): AppJson<CreateCategoriaDTO>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Solo ADMIN può creare categorie
    // 2. Validare il body, gli errori diventano FieldMessage
    // 3. Salvare e rispondere 201 con Location
    require_role(&current_user, Perfil::Admin)?;
    body.validate()?;

    let categoria = state.categorias.insert(&body).await?;
    info!("Categoria {} created", categoria.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/categorias/{}", categoria.id))],
        Json(CategoriaDTO::from(categoria)),
    ))
}

#[instrument(skip(state, current_user), fields(categoria_id = %id, user = %current_user.email))]
pub async fn delete_categoria(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserSS>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode, AppError> {
    require_role(&current_user, Perfil::Admin)?;

    if state.categorias.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found("Objeto não encontrado")
            .with_details(format!("Id: {}, Tipo: Categoria", id)));
    }

    state.categorias.delete(id).await.map_err(|e| match e {
        sqlx::Error::Database(_) => {
            warn!("Categoria still referenced by produtos");
            AppError::bad_request("Não é possível excluir uma categoria que possui produtos")
        }
        other => AppError::from(other),
    })?;

    info!("Categoria deleted");
    Ok(StatusCode::NO_CONTENT)
}
