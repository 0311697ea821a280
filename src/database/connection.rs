//! Conexión a SQLite
//!
//! Este módulo abre el pool de conexiones y ejecuta el script de
//! inicialización del schema.

use sqlx::{Executor, SqlitePool};
use tracing::{info, warn};

use crate::config::DatabaseConfig;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Pool de conexiones a la base de datos de la locadora
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Abrir el pool (crea el archivo si no existe)
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🗄️ Abrindo banco de dados: {}", config.url);
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    /// Pool en memoria con el schema ya creado
    pub async fn new_in_memory() -> Result<Self, sqlx::Error> {
        let pool = DatabaseConfig::in_memory().create_test_pool().await?;
        let connection = Self { pool };
        connection.initialize_schema().await?;
        Ok(connection)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Ejecutar el script de creación de tablas.
    ///
    /// Sobre un archivo ya inicializado falla porque las tablas existen;
    /// el llamador decide si eso es fatal.
    pub async fn initialize_schema(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        (&mut *conn).execute(SCHEMA_SQL).await?;
        info!("✅ Banco de dados inicializado com sucesso.");
        Ok(())
    }

    /// Inicializar el schema registrando el fallo sin abortar el arranque
    pub async fn ensure_schema(&self) {
        if let Err(e) = self.initialize_schema().await {
            warn!("⚠️ Banco de dados já existe ou falhou ao criar: {}", e);
        }
    }
}
