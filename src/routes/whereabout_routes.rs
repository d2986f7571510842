//! Rutas del scheduler de pick-up lorries

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::whereabout_controller::WhereaboutController;
use crate::dto::whereabout_dto::{
    AvailableNowResponse, DayScheduleResponse, NowResponse, ScheduleQuery, SlotResponse,
    UpdateWhereaboutRequest, WhereaboutFormResponse,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_whereabout_router() -> Router<AppState> {
    Router::new()
        .route("/form/:vehicle_id", get(get_form))
        .route("/update", post(update_whereabout))
        .route("/available-now", get(get_available_now))
        .route("/schedule", get(get_day_schedule))
        .route("/now", get(get_now))
}

fn controller(state: &AppState) -> WhereaboutController {
    WhereaboutController::new(
        state.pool.clone(),
        state.config.timezone,
        state.config.fallback_policy,
    )
}

async fn get_now(State(state): State<AppState>) -> Json<NowResponse> {
    Json(controller(&state).now())
}

async fn get_form(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<WhereaboutFormResponse>, AppError> {
    let response = controller(&state).form(&vehicle_id).await?;
    Ok(Json(response))
}

async fn update_whereabout(
    State(state): State<AppState>,
    Json(request): Json<UpdateWhereaboutRequest>,
) -> Result<Json<ApiResponse<SlotResponse>>, AppError> {
    let response = controller(&state).update(request).await?;
    Ok(Json(response))
}

async fn get_available_now(
    State(state): State<AppState>,
) -> Result<Json<AvailableNowResponse>, AppError> {
    let response = controller(&state).available_now().await?;
    Ok(Json(response))
}

async fn get_day_schedule(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<DayScheduleResponse>, AppError> {
    let response = controller(&state).schedule(query.vehicles).await?;
    Ok(Json(response))
}
