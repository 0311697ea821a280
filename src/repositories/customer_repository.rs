use sqlx::SqliteConnection;

use crate::dto::customer_dto::CreateCustomerRequest;
use crate::models::Customer;
use crate::utils::errors::{is_integrity_violation, AppError, AppResult};

pub struct CustomerRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> CustomerRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn find_all(&mut self) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id_cliente, nome, cpf, cnh, telefone FROM Cliente",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(customers)
    }

    pub async fn create(&mut self, request: &CreateCustomerRequest) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO Cliente (nome, cpf, cnh, telefone) VALUES (?, ?, ?, ?)")
            .bind(&request.nome)
            .bind(&request.cpf)
            .bind(&request.cnh)
            .bind(&request.telefone)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| {
                if is_integrity_violation(&e) {
                    AppError::Integrity("Falha ao adicionar cliente. CPF já existe.".to_string())
                } else {
                    AppError::Database(e)
                }
            })?;

        Ok(result.last_insert_rowid())
    }

    pub async fn delete(&mut self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM Cliente WHERE id_cliente = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}
