//! DTOs del directorio de vehículos

use serde::{Deserialize, Serialize};

use crate::models::directory::VehicleRecord;

/// Filtros de facetas del listado. Cada campo es una lista separada por
/// comas; un filtro ausente no restringe.
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryFilters {
    pub vehicle_type: Option<String>,
    pub status: Option<String>,
}

/// Response de un registro del directorio
#[derive(Debug, Serialize)]
pub struct VehicleRecordResponse {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub plate_no: String,
    pub status: String,
    pub current_location: String,
    pub assigned_to: String,
    pub purpose: String,
    pub last_update: String,
}

impl From<&VehicleRecord> for VehicleRecordResponse {
    fn from(record: &VehicleRecord) -> Self {
        Self {
            vehicle_id: record.vehicle_id.clone(),
            vehicle_type: record.vehicle_type.clone(),
            plate_no: record.plate_no.clone(),
            status: record.status.clone(),
            current_location: record.current_location.clone(),
            assigned_to: record.assigned_to.clone(),
            purpose: record.purpose.clone(),
            last_update: record.last_update.clone(),
        }
    }
}

/// Contadores KPI del directorio
#[derive(Debug, Serialize)]
pub struct DirectoryStatsResponse {
    pub total: usize,
    pub available: usize,
    pub in_use: usize,
}

/// Opciones de las facetas para poblar los widgets de filtro
#[derive(Debug, Serialize)]
pub struct DirectoryFacetsResponse {
    pub vehicle_types: Vec<String>,
    pub statuses: Vec<String>,
}
