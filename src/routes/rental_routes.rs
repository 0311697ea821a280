use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::info;

use crate::dto::rental_dto::CreateRentalRequest;
use crate::dto::MessageResponse;
use crate::models::RentalListing;
use crate::repositories::RentalRepository;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extractors::{DbConnection, IdPath, JsonBody};

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rentals).post(create_rental))
        .route("/:id", delete(finish_rental))
}

async fn list_rentals(mut conn: DbConnection) -> AppResult<Json<Vec<RentalListing>>> {
    let rentals = RentalRepository::new(&mut conn).find_all().await?;
    Ok(Json(rentals))
}

async fn create_rental(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateRentalRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let mut conn = DbConnection::acquire(&state.pool).await?;
    let id = RentalRepository::new(&mut conn).create(&request).await?;
    info!(
        "📝 Locação {} registrada (cliente {}, veículo {})",
        id, request.id_cliente, request.id_veiculo
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Locação registrada com sucesso!")),
    ))
}

async fn finish_rental(
    mut conn: DbConnection,
    IdPath(id): IdPath<u32>,
) -> AppResult<Json<MessageResponse>> {
    RentalRepository::new(&mut conn).delete(id.into()).await?;
    Ok(Json(MessageResponse::new("Locação finalizada com sucesso!")))
}
