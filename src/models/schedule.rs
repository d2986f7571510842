//! Modelo del schedule de pick-up lorries
//!
//! Mapea exactamente a la tabla pickup_schedule con primary key
//! (vehicle_id, time_start). Los tiempos son strings "HH:MM" normalizados
//! con cero a la izquierda, comparables lexicográficamente.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Slot de schedule de un vehículo para el día en curso
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ScheduleSlot {
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

/// Estado de un slot - enum cerrado {Available, Busy}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    Available,
    Busy,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "Available",
            SlotStatus::Busy => "Busy",
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotStatus {
    type Err = String;

    /// Cualquier valor fuera del enum se rechaza, no se ajusta
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Available" => Ok(SlotStatus::Available),
            "Busy" => Ok(SlotStatus::Busy),
            other => Err(format!(
                "Invalid status '{}', expected 'Available' or 'Busy'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_status_round_trip() {
        assert_eq!("Available".parse::<SlotStatus>().unwrap(), SlotStatus::Available);
        assert_eq!("Busy".parse::<SlotStatus>().unwrap(), SlotStatus::Busy);
        assert_eq!(SlotStatus::Available.as_str(), "Available");
    }

    #[test]
    fn test_slot_status_rejects_unknown_values() {
        assert!("available".parse::<SlotStatus>().is_err());
        assert!("Offline".parse::<SlotStatus>().is_err());
        assert!("".parse::<SlotStatus>().is_err());
    }
}
