use serde::Deserialize;

// Request para registrar una locación. No se comprueba que cliente
// y vehículo existan.
#[derive(Debug, Deserialize)]
pub struct CreateRentalRequest {
    pub id_cliente: i64,
    pub id_veiculo: i64,
    pub data: String,
    pub valor: f64,
    pub forma_pagamento: String,
}
