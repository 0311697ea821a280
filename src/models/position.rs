//! Modelo de Posición
//!
//! Muestra GPS de un rastreador. `data_hora` la asigna el store al insertar,
//! en hora local del servidor (`YYYY-MM-DD HH:MM:SS`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub data_hora: String,
}
