use serde::{Deserialize, Serialize};

// Reporte de posición enviado por un rastreador (o por el simulador)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPositionRequest {
    pub id_rastreador: i64,
    pub lat: f64,
    pub lon: f64,
}
