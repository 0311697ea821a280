use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use tracing::info;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleStatusRequest, VehicleFilters};
use crate::dto::MessageResponse;
use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extractors::{DbConnection, IdPath, JsonBody, QueryParams};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/status", put(update_vehicle_status))
}

async fn list_vehicles(
    mut conn: DbConnection,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let filters = VehicleFilters::from_pairs(pairs);
    let vehicles = VehicleRepository::new(&mut conn)
        .find_all(filters.status())
        .await?;
    Ok(Json(vehicles))
}

async fn create_vehicle(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateVehicleRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let mut conn = DbConnection::acquire(&state.pool).await?;
    let id = VehicleRepository::new(&mut conn).create(&request).await?;
    info!("🚗 Veículo {} criado (placa {})", id, request.placa);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Veículo adicionado com sucesso!")),
    ))
}

async fn delete_vehicle(
    mut conn: DbConnection,
    IdPath(id): IdPath<u32>,
) -> AppResult<Json<MessageResponse>> {
    VehicleRepository::new(&mut conn).delete(id.into()).await?;
    Ok(Json(MessageResponse::new("Veículo deletado com sucesso!")))
}

async fn update_vehicle_status(
    State(state): State<AppState>,
    IdPath(id): IdPath<u32>,
    JsonBody(request): JsonBody<UpdateVehicleStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    let mut conn = DbConnection::acquire(&state.pool).await?;
    let status = request.status.as_deref();
    VehicleRepository::new(&mut conn)
        .update_status(id.into(), status)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Status do veículo {} atualizado para {}!",
        id,
        status.unwrap_or_default()
    ))))
}
