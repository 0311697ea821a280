//! Modelo de Cliente

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id_cliente: i64,
    pub nome: String,
    pub cpf: String,
    pub cnh: Option<String>,
    pub telefone: Option<String>,
}
