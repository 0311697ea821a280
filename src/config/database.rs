//! Configuración de base de datos
//!
//! Este módulo maneja la creación del pool SQLite con SQLx.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::environment::EnvironmentConfig;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl From<&EnvironmentConfig> for DatabaseConfig {
    fn from(env: &EnvironmentConfig) -> Self {
        Self {
            url: env.database_url.clone(),
            max_connections: env.database_max_connections,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    /// Base de datos en memoria (tests)
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        // Las FK se declaran en el schema pero no se hacen cumplir:
        // borrar un vehículo alquilado deja la locación huérfana.
        Ok(SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(false))
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect_with(self.connect_options()?)
            .await
    }

    /// Crear un pool de una sola conexión que nunca expira.
    /// Cada conexión `:memory:` es una base distinta, así que hay que mantenerla viva.
    pub async fn create_test_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(self.acquire_timeout)
            .connect_with(self.connect_options()?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_environment() {
        let env = EnvironmentConfig {
            database_url: "sqlite:otra.db".to_string(),
            database_max_connections: 3,
            ..EnvironmentConfig::default()
        };
        let config = DatabaseConfig::from(&env);
        assert_eq!(config.url, "sqlite:otra.db");
        assert_eq!(config.max_connections, 3);
    }

    #[tokio::test]
    async fn test_in_memory_pool_connects() {
        let pool = DatabaseConfig::in_memory().create_test_pool().await.unwrap();
        let (one,): (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);
    }
}
