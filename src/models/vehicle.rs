//! Modelo de Vehículo
//!
//! Mapea la tabla `Veiculo`. El orden de los campos es el de las columnas,
//! que es también el orden de las claves en el JSON.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id_veiculo: i64,
    pub modelo: String,
    pub placa: String,
    pub capacidade: Option<i64>,
    /// Texto libre ("Disponível", "Alugado", ...), no se valida
    pub status: String,
    pub id_rastreador: Option<i64>,
    pub descricao: Option<String>,
}
