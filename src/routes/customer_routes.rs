use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::dto::customer_dto::CreateCustomerRequest;
use crate::dto::MessageResponse;
use crate::models::Customer;
use crate::repositories::CustomerRepository;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extractors::{DbConnection, IdPath, JsonBody};

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/:id", delete(delete_customer))
}

async fn list_customers(mut conn: DbConnection) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepository::new(&mut conn).find_all().await?;
    Ok(Json(customers))
}

async fn create_customer(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let mut conn = DbConnection::acquire(&state.pool).await?;
    CustomerRepository::new(&mut conn).create(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Cliente adicionado com sucesso!")),
    ))
}

async fn delete_customer(
    mut conn: DbConnection,
    IdPath(id): IdPath<u32>,
) -> AppResult<Json<MessageResponse>> {
    CustomerRepository::new(&mut conn).delete(id.into()).await?;
    Ok(Json(MessageResponse::new("Cliente deletado com sucesso!")))
}
