//! Extractores de Axum
//!
//! Envuelven los extractores estándar para que sus rechazos usen `AppError`
//! y proveen la conexión al store de cada request.

use std::ops::{Deref, DerefMut};

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection, SqlitePool};

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Cuerpo JSON; los rechazos responden con el sobre `{"erro"}`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Query string; los rechazos responden 400 con el sobre `{"erro"}`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// Segmento de ruta; un valor no numérico responde 404
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);

/// Conexión tomada del pool para un request.
///
/// Vuelve al pool al soltarse, cuando termina el handler con éxito o con error.
/// Los handlers con cuerpo JSON la piden con `acquire` después de leer el
/// cuerpo, así una subida lenta no retiene una conexión.
pub struct DbConnection(pub PoolConnection<Sqlite>);

impl DbConnection {
    pub async fn acquire(pool: &SqlitePool) -> Result<Self, AppError> {
        Ok(DbConnection(pool.acquire().await?))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for DbConnection {
    type Rejection = AppError;

    async fn from_request_parts(_: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Self::acquire(&state.pool).await
    }
}

impl Deref for DbConnection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
