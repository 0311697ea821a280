use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use crate::dto::position_dto::ReportPositionRequest;
use crate::dto::MessageResponse;
use crate::models::Position;
use crate::repositories::PositionRepository;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extractors::{DbConnection, IdPath, JsonBody};

pub fn create_tracker_router() -> Router<AppState> {
    Router::new()
        .route("/", post(report_position))
        .route("/:id", get(get_positions))
}

async fn get_positions(
    mut conn: DbConnection,
    IdPath(id_rastreador): IdPath<u32>,
) -> AppResult<Json<Vec<Position>>> {
    let positions = PositionRepository::new(&mut conn)
        .find_by_tracker(id_rastreador.into())
        .await?;
    Ok(Json(positions))
}

async fn report_position(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ReportPositionRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let mut conn = DbConnection::acquire(&state.pool).await?;
    PositionRepository::new(&mut conn).create(&request).await?;
    debug!(
        "📍 Rastreador {}: ({:.6}, {:.6})",
        request.id_rastreador, request.lat, request.lon
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Posição recebida com sucesso!")),
    ))
}
