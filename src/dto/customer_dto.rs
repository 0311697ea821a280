use serde::Deserialize;

// Request para registrar un cliente
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub nome: String,
    pub cpf: String,
    pub cnh: Option<String>,
    pub telefone: Option<String>,
}
