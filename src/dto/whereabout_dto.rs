//! DTOs del scheduler de pick-up lorries

use serde::{Deserialize, Serialize};

use crate::models::schedule::ScheduleSlot;
use crate::services::slot_resolver::Resolution;

/// Response de un slot del schedule
#[derive(Debug, Serialize)]
pub struct SlotResponse {
    pub vehicle_id: String,
    pub plate_no: String,
    pub driver: String,
    pub time_start: String,
    pub time_end: String,
    pub current_location: String,
    pub status: String,
    pub remarks: String,
    pub last_updated: String,
}

impl From<&ScheduleSlot> for SlotResponse {
    fn from(slot: &ScheduleSlot) -> Self {
        Self {
            vehicle_id: slot.vehicle_id.clone(),
            plate_no: slot.plate_no.clone(),
            driver: slot.driver.clone(),
            time_start: slot.time_start.clone(),
            time_end: slot.time_end.clone(),
            current_location: slot.current_location.clone(),
            status: slot.status.clone(),
            remarks: slot.remarks.clone(),
            last_updated: slot.last_updated.clone(),
        }
    }
}

impl From<ScheduleSlot> for SlotResponse {
    fn from(slot: ScheduleSlot) -> Self {
        Self::from(&slot)
    }
}

/// Prefill del formulario de whereabout: el slot resuelto, su clave de
/// fila y cómo se resolvió (para el texto de ayuda del driver)
#[derive(Debug, Serialize)]
pub struct WhereaboutFormResponse {
    pub now: String,
    pub resolution: Resolution,
    pub slot: SlotResponse,
}

/// Request de actualización de whereabout. La clave (vehicle_id,
/// time_start) identifica el slot resuelto por el formulario.
#[derive(Debug, Deserialize)]
pub struct UpdateWhereaboutRequest {
    pub vehicle_id: String,
    pub time_start: String,
    pub current_location: String,
    pub status: String,
    #[serde(default)]
    pub remarks: String,
}

/// Vista Available-Now; `lorries` vacío es un estado presentable
#[derive(Debug, Serialize)]
pub struct AvailableNowResponse {
    pub now: String,
    pub lorries: Vec<SlotResponse>,
}

/// Fila del Day Schedule anotada con el flag de actividad
#[derive(Debug, Serialize)]
pub struct ScheduleRowResponse {
    #[serde(flatten)]
    pub slot: SlotResponse,
    pub active_now: bool,
}

/// Vista Day Schedule
#[derive(Debug, Serialize)]
pub struct DayScheduleResponse {
    pub now: String,
    pub rows: Vec<ScheduleRowResponse>,
}

/// Query del Day Schedule: subconjunto de vehículos separado por comas
#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub vehicles: Option<String>,
}

/// Caption de tiempo actual localizado
#[derive(Debug, Serialize)]
pub struct NowResponse {
    pub now: String,
    pub stamp: String,
    pub timezone: String,
}
