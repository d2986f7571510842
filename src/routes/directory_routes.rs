//! Rutas del directorio de vehículos

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::directory_controller::DirectoryController;
use crate::dto::directory_dto::{
    DirectoryFacetsResponse, DirectoryFilters, DirectoryStatsResponse, VehicleRecordResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_directory_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/facets", get(get_facets))
        .route("/stats", get(get_stats))
        .route("/:vehicle_id", get(get_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<DirectoryFilters>,
) -> Json<Vec<VehicleRecordResponse>> {
    let controller = DirectoryController::new(state.directory.clone());
    Json(controller.list(&filters))
}

async fn get_facets(State(state): State<AppState>) -> Json<DirectoryFacetsResponse> {
    let controller = DirectoryController::new(state.directory.clone());
    Json(controller.facets())
}

async fn get_stats(State(state): State<AppState>) -> Json<DirectoryStatsResponse> {
    let controller = DirectoryController::new(state.directory.clone());
    Json(controller.stats())
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<VehicleRecordResponse>, AppError> {
    let controller = DirectoryController::new(state.directory.clone());
    let response = controller.get(&vehicle_id)?;
    Ok(Json(response))
}
