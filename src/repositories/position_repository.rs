use sqlx::SqliteConnection;

use crate::dto::position_dto::ReportPositionRequest;
use crate::models::Position;
use crate::utils::errors::AppResult;

pub struct PositionRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> PositionRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Historial de un rastreador, la más reciente primero
    pub async fn find_by_tracker(&mut self, id_rastreador: i64) -> AppResult<Vec<Position>> {
        // data_hora tiene resolución de segundos; el id desempata
        let positions = sqlx::query_as::<_, Position>(
            r#"
            SELECT latitude, longitude, data_hora
            FROM Posicoes
            WHERE id_rastreador = ?
            ORDER BY data_hora DESC, id_posicao DESC
            "#,
        )
        .bind(id_rastreador)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(positions)
    }

    /// Guardar una posición con la hora local del servidor
    pub async fn create(&mut self, request: &ReportPositionRequest) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO Posicoes (id_rastreador, latitude, longitude, data_hora)
            VALUES (?, ?, ?, datetime('now', 'localtime'))
            "#,
        )
        .bind(request.id_rastreador)
        .bind(request.lat)
        .bind(request.lon)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseConnection;

    #[tokio::test]
    async fn test_positions_newest_first_per_tracker() {
        let db = DatabaseConnection::new_in_memory().await.unwrap();
        let mut conn = db.pool().acquire().await.unwrap();
        let mut repo = PositionRepository::new(&mut conn);

        for (id_rastreador, lat) in [(7, -22.1), (7, -22.2), (8, -22.3)] {
            repo.create(&ReportPositionRequest {
                id_rastreador,
                lat,
                lon: -49.9,
            })
            .await
            .unwrap();
        }

        let positions = repo.find_by_tracker(7).await.unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].latitude, -22.2);
        assert_eq!(positions[1].latitude, -22.1);
        assert_eq!(positions[0].data_hora.len(), "2024-01-01 00:00:00".len());

        assert!(repo.find_by_tracker(1).await.unwrap().is_empty());
    }
}
