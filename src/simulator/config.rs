//! Configuración del simulador de GPS

use std::time::Duration;

use crate::config::environment::{env_or, parse_env, ConfigError};

/// Coordenada base alrededor de la cual se reparten los vehículos
pub const BASE_LATITUDE: f64 = -22.2152;
pub const BASE_LONGITUDE: f64 = -49.9442;

/// Dispersión inicial, en grados, por eje
pub const SEED_SPREAD: f64 = 0.01;

/// Desplazamiento máximo por ciclo, en grados, por eje
pub const STEP_SPREAD: f64 = 0.0005;

#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub api_url: String,
    pub interval: Duration,
    pub http_timeout: Duration,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:5000".to_string(),
            interval: Duration::from_secs(10),
            http_timeout: Duration::from_secs(10),
        }
    }
}

impl SimulatorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            api_url: env_or("SIMULATOR_API_URL", &defaults.api_url),
            interval: Duration::from_secs(parse_env(
                "SIMULATOR_INTERVAL_SECS",
                defaults.interval.as_secs(),
            )?),
            http_timeout: Duration::from_secs(parse_env(
                "SIMULATOR_HTTP_TIMEOUT_SECS",
                defaults.http_timeout.as_secs(),
            )?),
        })
    }

    pub fn vehicles_url(&self) -> String {
        format!("{}/api/veiculos", self.api_url.trim_end_matches('/'))
    }

    pub fn tracker_url(&self) -> String {
        format!("{}/api/rastreador", self.api_url.trim_end_matches('/'))
    }
}
