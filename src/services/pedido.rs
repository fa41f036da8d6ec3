//! Pedido services - Creazione e consultazione degli ordini

use crate::core::{AppError, AppJson, AppPath, AppState, UserSS, require_role, require_self_or_admin};
use crate::dtos::{CreatePedidoDTO, InsertPedidoDTO};
use crate::entities::{EstadoPagamento, Pagamento, Pedido, Perfil, TipoPagamento};
use crate::repositories::{Create, Read};
use axum::{
    Extension,
    extract::{Json, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use axum_macros::debug_handler;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[debug_handler]
#[instrument(skip(state, current_user, body), fields(user = %current_user.email))]
pub async fn insert_pedido(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserSS>,
    AppJson(body): AppJson<CreatePedidoDTO>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Validare il pagamento
    // 2. Il pedido appartiene sempre al principal corrente, con l'istante del server
    // 3. Il boleto scade una settimana dopo il pedido, il pagamento parte PENDENTE
    let errors = body.check_pagamento();
    if !errors.is_empty() {
        return Err(AppError::validation(errors));
    }

    let instante = Utc::now();
    let mut pagamento = body.pagamento;
    if let TipoPagamento::ComBoleto(boleto) = &mut pagamento {
        boleto.preencher(instante.date_naive());
    }

    let pedido = state
        .pedido
        .create(&InsertPedidoDTO {
            cliente_id: current_user.id,
            instante,
            estado: EstadoPagamento::Pendente,
            pagamento,
        })
        .await?;
    info!(
        "Pedido {} created, pagamento {:?}",
        pedido.id,
        pedido.pagamento().and_then(|p| p.estado())
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/pedidos/{}", pedido.id))],
        Json(pedido),
    ))
}

#[instrument(skip(state, current_user), fields(pedido_id = %id, user = %current_user.email))]
pub async fn get_pedido(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserSS>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Pedido>, AppError> {
    let Some(pedido) = state.pedido.read(&id).await? else {
        warn!("Pedido not found");
        return Err(AppError::not_found("Objeto não encontrado")
            .with_details(format!("Id: {}, Tipo: Pedido", id)));
    };
    require_self_or_admin(&current_user, pedido.cliente_id)?;
    Ok(Json(pedido))
}

/// Ordini del principal corrente, dal più recente
#[instrument(skip(state, current_user), fields(user = %current_user.email))]
pub async fn list_my_pedidos(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserSS>,
) -> Result<Json<Vec<Pedido>>, AppError> {
    let pedidos = state.pedido.find_many_by_cliente_id(&current_user.id).await?;
    Ok(Json(pedidos))
}

/// Consultazione diretta di un pagamento, riservata agli ADMIN
#[instrument(skip(state, current_user), fields(pagamento_id = %id, user = %current_user.email))]
pub async fn get_pagamento(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserSS>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Pagamento>, AppError> {
    require_role(&current_user, Perfil::Admin)?;
    state
        .pagamento
        .read(&id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::not_found("Objeto não encontrado")
                .with_details(format!("Id: {}, Tipo: Pagamento", id))
        })
}
