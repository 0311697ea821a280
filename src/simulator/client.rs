//! Cliente HTTP del simulador
//!
//! `FleetApi` es todo lo que el simulador necesita de la API: listar vehículos
//! y reportar posiciones. `HttpFleetClient` lo implementa con reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use super::config::SimulatorConfig;
use crate::dto::position_dto::ReportPositionRequest;

#[derive(Debug, Clone, Error)]
pub enum SimulatorError {
    #[error("falha de conexão: {0}")]
    Connection(String),

    #[error("status inesperado: {0}")]
    UnexpectedStatus(u16),

    #[error("resposta inválida: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for SimulatorError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SimulatorError::InvalidResponse(e.to_string())
        } else {
            SimulatorError::Connection(e.to_string())
        }
    }
}

/// Lo que el simulador lee de cada vehículo; el resto de campos se ignora
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FleetVehicle {
    pub id_rastreador: Option<i64>,
    pub modelo: Option<String>,
}

/// Resultado de un reporte que llegó al servidor
#[derive(Debug, Clone, PartialEq)]
pub enum ReportAck {
    Accepted,
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait FleetApi {
    async fn fetch_vehicles(&self) -> Result<Vec<FleetVehicle>, SimulatorError>;

    async fn report_position(
        &self,
        report: &ReportPositionRequest,
    ) -> Result<ReportAck, SimulatorError>;
}

pub struct HttpFleetClient {
    client: Client,
    vehicles_url: String,
    tracker_url: String,
}

impl HttpFleetClient {
    pub fn new(config: &SimulatorConfig) -> Result<Self, SimulatorError> {
        let client = Client::builder().timeout(config.http_timeout).build()?;

        Ok(Self {
            client,
            vehicles_url: config.vehicles_url(),
            tracker_url: config.tracker_url(),
        })
    }
}

#[async_trait]
impl FleetApi for HttpFleetClient {
    async fn fetch_vehicles(&self) -> Result<Vec<FleetVehicle>, SimulatorError> {
        let response = self.client.get(&self.vehicles_url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(SimulatorError::UnexpectedStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    async fn report_position(
        &self,
        report: &ReportPositionRequest,
    ) -> Result<ReportAck, SimulatorError> {
        let response = self.client.post(&self.tracker_url).json(report).send().await?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(ReportAck::Accepted);
        }

        let body = response.text().await.unwrap_or_default();
        Ok(ReportAck::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
