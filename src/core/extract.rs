//! Extractor dell'applicazione: stessi estrattori di axum, ma i rifiuti
//! diventano `AppError` e quindi rispondono con il body JSON standard.

use crate::core::AppError;
use axum_macros::{FromRequest, FromRequestParts};

/// Body JSON; un campo mancante o non valido risponde 422 con FieldMessage
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
