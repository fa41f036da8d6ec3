//! Cliente services - Registrazione e consultazione dei clienti

use crate::core::error::field_messages;
use crate::core::{AppError, AppJson, AppPath, AppState, UserSS, require_role, require_self_or_admin};
use crate::dtos::{ClienteDTO, CreateClienteDTO, FieldMessage};
use crate::entities::{Cliente, Perfil};
use crate::repositories::{Create, Read, ReadAll};
use axum::{
    Extension,
    extract::{Json, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn insert_cliente(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<CreateClienteDTO>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Raccogliere tutti gli errori di validazione, derivati e incrociati
    // 2. Rifiutare email già registrate
    // 3. Salvare con la password hashata
    let mut errors = match body.validate() {
        Ok(()) => Vec::new(),
        Err(e) => field_messages(&e),
    };
    errors.extend(body.check_documento());

    if state.cliente.find_by_email(&body.email).await?.is_some() {
        errors.push(FieldMessage::new("email", "Email já existente"));
    }

    if !errors.is_empty() {
        warn!("Cliente registration rejected with {} errors", errors.len());
        return Err(AppError::validation(errors));
    }

    let senha = Cliente::hash_password(&body.senha, state.bcrypt_cost)?;
    let cliente = state
        .cliente
        .create(&CreateClienteDTO { senha, ..body })
        .await?;
    info!("Cliente {} registered", cliente.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/clientes/{}", cliente.id))],
        Json(ClienteDTO::from(cliente)),
    ))
}

#[instrument(skip(state, current_user), fields(user = %current_user.email))]
pub async fn list_clientes(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserSS>,
) -> Result<Json<Vec<ClienteDTO>>, AppError> {
    require_role(&current_user, Perfil::Admin)?;
    let clientes = state.cliente.read_all().await?;
    debug!("Found {} clientes", clientes.len());
    Ok(Json(clientes.into_iter().map(ClienteDTO::from).collect()))
}

#[instrument(skip(state, current_user), fields(cliente_id = %id, user = %current_user.email))]
pub async fn get_cliente(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserSS>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ClienteDTO>, AppError> {
    require_self_or_admin(&current_user, id)?;
    match state.cliente.read(&id).await? {
        Some(cliente) => Ok(Json(ClienteDTO::from(cliente))),
        None => Err(AppError::not_found("Objeto não encontrado")
            .with_details(format!("Id: {}, Tipo: Cliente", id))),
    }
}
