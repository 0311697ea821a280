use sqlx::SqliteConnection;

use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::Vehicle;
use crate::utils::errors::{is_integrity_violation, AppError, AppResult};

pub struct VehicleRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> VehicleRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Todos los vehículos, o solo los que tienen exactamente ese `status`
    pub async fn find_all(&mut self, status: Option<&str>) -> AppResult<Vec<Vehicle>> {
        let vehicles = match status {
            Some(status) => {
                sqlx::query_as::<_, Vehicle>(
                    r#"
                    SELECT id_veiculo, modelo, placa, capacidade, status, id_rastreador, descricao
                    FROM Veiculo
                    WHERE status = ?
                    "#,
                )
                .bind(status)
                .fetch_all(&mut *self.conn)
                .await?
            }
            None => {
                sqlx::query_as::<_, Vehicle>(
                    r#"
                    SELECT id_veiculo, modelo, placa, capacidade, status, id_rastreador, descricao
                    FROM Veiculo
                    "#,
                )
                .fetch_all(&mut *self.conn)
                .await?
            }
        };

        Ok(vehicles)
    }

    /// Insertar un vehículo y devolver su id.
    ///
    /// Placa o rastreador repetidos llegan como `AppError::Integrity`.
    pub async fn create(&mut self, request: &CreateVehicleRequest) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO Veiculo (modelo, placa, capacidade, status, id_rastreador, descricao)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.modelo)
        .bind(&request.placa)
        .bind(request.capacidade)
        .bind(&request.status)
        .bind(request.id_rastreador)
        .bind(&request.descricao)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| {
            if is_integrity_violation(&e) {
                AppError::Integrity(format!(
                    "Falha ao adicionar veículo. A placa ou ID do rastreador já existe. {}",
                    e
                ))
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update_status(&mut self, id: i64, status: Option<&str>) -> AppResult<u64> {
        let result = sqlx::query("UPDATE Veiculo SET status = ? WHERE id_veiculo = ?")
            .bind(status)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&mut self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM Veiculo WHERE id_veiculo = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseConnection;

    fn onix(placa: &str, id_rastreador: Option<i64>) -> CreateVehicleRequest {
        CreateVehicleRequest {
            modelo: "Onix".to_string(),
            placa: placa.to_string(),
            capacidade: Some(5),
            status: "Disponível".to_string(),
            id_rastreador,
            descricao: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_filter_by_status() {
        let db = DatabaseConnection::new_in_memory().await.unwrap();
        let mut conn = db.pool().acquire().await.unwrap();
        let mut repo = VehicleRepository::new(&mut conn);

        let first = repo.create(&onix("ABC123", Some(7))).await.unwrap();
        let second = repo.create(&onix("XYZ999", None)).await.unwrap();
        assert_ne!(first, second);

        repo.update_status(second, Some("Alugado")).await.unwrap();

        let available = repo.find_all(Some("Disponível")).await.unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].placa, "ABC123");
        assert_eq!(available[0].id_rastreador, Some(7));

        // Coincidencia exacta, sensible a mayúsculas
        assert!(repo.find_all(Some("disponível")).await.unwrap().is_empty());
        assert_eq!(repo.find_all(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_tracker_is_integrity_error() {
        let db = DatabaseConnection::new_in_memory().await.unwrap();
        let mut conn = db.pool().acquire().await.unwrap();
        let mut repo = VehicleRepository::new(&mut conn);

        repo.create(&onix("ABC123", Some(7))).await.unwrap();
        let err = repo.create(&onix("DEF456", Some(7))).await.unwrap_err();

        assert!(matches!(err, AppError::Integrity(_)));
        assert!(err.to_string().contains("UNIQUE"));
    }

    #[tokio::test]
    async fn test_missing_vehicle_is_noop() {
        let db = DatabaseConnection::new_in_memory().await.unwrap();
        let mut conn = db.pool().acquire().await.unwrap();
        let mut repo = VehicleRepository::new(&mut conn);

        assert_eq!(repo.delete(42).await.unwrap(), 0);
        assert_eq!(repo.update_status(42, Some("Alugado")).await.unwrap(), 0);
    }
}
