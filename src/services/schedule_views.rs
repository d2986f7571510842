//! Vistas derivadas del schedule
//!
//! Proyecciones de solo lectura recalculadas en cada petición:
//! Available-Now y Day Schedule. El orden de salida es siempre
//! (vehicle_id, time_start) ascendente; la comparación lexicográfica es
//! correcta porque los tiempos están normalizados a "HH:MM".

use std::collections::HashSet;

use crate::models::schedule::{ScheduleSlot, SlotStatus};
use crate::services::slot_resolver::slot_is_active;

/// Fila del Day Schedule anotada con el flag de actividad
#[derive(Debug, PartialEq, Eq)]
pub struct ScheduleEntry<'a> {
    pub slot: &'a ScheduleSlot,
    pub active_now: bool,
}

fn sort_chronologically(slots: &mut [&ScheduleSlot]) {
    slots.sort_by(|a, b| {
        (a.vehicle_id.as_str(), a.time_start.as_str(), a.time_end.as_str()).cmp(&(
            b.vehicle_id.as_str(),
            b.time_start.as_str(),
            b.time_end.as_str(),
        ))
    });
}

/// Slots con status Available cuyo intervalo contiene "ahora".
/// Un resultado vacío es un estado válido y presentable, no un error.
pub fn available_now<'a>(slots: &'a [ScheduleSlot], now: &str) -> Vec<&'a ScheduleSlot> {
    let mut result: Vec<&ScheduleSlot> = slots
        .iter()
        .filter(|s| s.status == SlotStatus::Available.as_str() && slot_is_active(s, now))
        .collect();
    sort_chronologically(&mut result);
    result
}

/// Todos los slots del subconjunto de vehículos elegido, anotados con
/// `active_now` (solo el test de tiempo, independiente del status).
pub fn day_schedule<'a>(
    slots: &'a [ScheduleSlot],
    vehicles: Option<&HashSet<String>>,
    now: &str,
) -> Vec<ScheduleEntry<'a>> {
    let mut selected: Vec<&ScheduleSlot> = slots
        .iter()
        .filter(|s| vehicles.map_or(true, |set| set.contains(&s.vehicle_id)))
        .collect();
    sort_chronologically(&mut selected);
    selected
        .into_iter()
        .map(|slot| ScheduleEntry {
            slot,
            active_now: slot_is_active(slot, now),
        })
        .collect()
}
