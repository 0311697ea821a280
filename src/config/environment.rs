//! Configuración de variables de entorno
//!
//! Este módulo lee la configuración del servidor HTTP desde el entorno,
//! con valores por defecto pensados para desarrollo local.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Error al interpretar una variable de entorno
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} tiene un valor inválido: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Leer una variable de entorno o usar el valor por defecto
pub(crate) fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Leer y parsear una variable numérica
pub(crate) fn parse_env<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            database_url: "sqlite:locadora.db".to_string(),
            database_max_connections: 5,
        }
    }
}

impl EnvironmentConfig {
    /// Construir la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: env_or("HOST", &defaults.host),
            port: parse_env("PORT", defaults.port)?,
            database_url: env_or("DATABASE_URL", &defaults.database_url),
            database_max_connections: parse_env(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
        })
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server_url()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "HOST",
                value: self.server_url(),
            })
    }
}
