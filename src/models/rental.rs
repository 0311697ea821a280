//! Modelo de Locación
//!
//! El listado de locaciones sale de un JOIN con `Cliente` y `Veiculo`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fila del listado de locaciones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RentalListing {
    pub id_locacao: i64,
    pub valor: f64,
    pub id_veiculo: i64,
    pub cliente_nome: String,
    pub veiculo_placa: String,
}
