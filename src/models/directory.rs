//! Modelo del directorio de vehículos
//!
//! Mapea exactamente a las columnas del fichero plano de vehículos.
//! No hay camino de mutación: la fuente se trata como estática por proceso.

use serde::{Deserialize, Serialize};

/// Registro del directorio de vehículos (solo lectura)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub plate_no: String,
    pub status: String,
    pub current_location: String,
    pub assigned_to: String,
    pub purpose: String,
    pub last_update: String,
}
