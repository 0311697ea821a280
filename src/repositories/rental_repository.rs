use sqlx::SqliteConnection;

use crate::dto::rental_dto::CreateRentalRequest;
use crate::models::RentalListing;
use crate::utils::errors::AppResult;

pub struct RentalRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> RentalRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Locaciones con nombre del cliente y placa del vehículo.
    ///
    /// INNER JOIN: si el cliente o el vehículo ya no existen la locación no aparece,
    /// aunque la fila siga en `Locacao`.
    pub async fn find_all(&mut self) -> AppResult<Vec<RentalListing>> {
        let rentals = sqlx::query_as::<_, RentalListing>(
            r#"
            SELECT
                loc.id_locacao, loc.valor, loc.id_veiculo,
                cli.nome AS cliente_nome,
                vei.placa AS veiculo_placa
            FROM Locacao loc
            JOIN Cliente cli ON loc.id_cliente = cli.id_cliente
            JOIN Veiculo vei ON loc.id_veiculo = vei.id_veiculo
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rentals)
    }

    pub async fn create(&mut self, request: &CreateRentalRequest) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO Locacao (id_cliente, id_veiculo, data, valor, forma_pagamento)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(request.id_cliente)
        .bind(request.id_veiculo)
        .bind(&request.data)
        .bind(request.valor)
        .bind(&request.forma_pagamento)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Finalizar una locación. No toca el estado del vehículo.
    pub async fn delete(&mut self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM Locacao WHERE id_locacao = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}
