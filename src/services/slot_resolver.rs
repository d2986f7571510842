//! Resolución del slot editable de un vehículo
//!
//! Dado el conjunto de slots, un vehicle_id y un "ahora" ("HH:MM"),
//! devuelve exactamente un slot a presentar como editable:
//!
//! - Activo: time_start <= now <= time_end (ambos extremos inclusive).
//!   Si varios slots solapados están activos, gana el menor
//!   (time_start, time_end) - desempate explícito, independiente del
//!   orden de almacenamiento.
//! - Sin activo: aplica la política de fallback configurada.
//! - Sin filas para el vehículo: `None` (el caller lo reporta como
//!   NO_ACTIVE_SLOT).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::schedule::ScheduleSlot;

/// Política de fallback cuando ningún slot contiene "ahora".
///
/// `NextUpcoming` es la política por defecto: el slot con el menor
/// time_start estrictamente mayor que "ahora", y si el día ya no tiene
/// slots futuros, el primero cronológico. `FirstOfDay` devuelve siempre
/// el primero cronológico del día.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    NextUpcoming,
    FirstOfDay,
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "next_upcoming" => Ok(FallbackPolicy::NextUpcoming),
            "first_of_day" => Ok(FallbackPolicy::FirstOfDay),
            other => Err(format!(
                "Invalid fallback policy '{}', expected 'next_upcoming' or 'first_of_day'",
                other
            )),
        }
    }
}

/// Cómo se eligió el slot devuelto, para el texto de ayuda del formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Active,
    Upcoming,
    FirstOfDay,
}

/// Slot resuelto junto con la forma en que se resolvió
#[derive(Debug, PartialEq, Eq)]
pub struct ResolvedSlot<'a> {
    pub slot: &'a ScheduleSlot,
    pub resolution: Resolution,
}

/// Predicado de actividad: el intervalo [time_start, time_end] contiene "ahora"
pub fn slot_is_active(slot: &ScheduleSlot, now: &str) -> bool {
    slot.time_start.as_str() <= now && now <= slot.time_end.as_str()
}

fn chronological_min<'a>(slots: &[&'a ScheduleSlot]) -> Option<&'a ScheduleSlot> {
    slots
        .iter()
        .min_by_key(|s| (s.time_start.as_str(), s.time_end.as_str()))
        .copied()
}

/// Resolver el slot editable de `vehicle_id` para el instante `now`
pub fn resolve_slot<'a>(
    slots: &'a [ScheduleSlot],
    vehicle_id: &str,
    now: &str,
    policy: FallbackPolicy,
) -> Option<ResolvedSlot<'a>> {
    let vehicle_slots: Vec<&ScheduleSlot> = slots
        .iter()
        .filter(|s| s.vehicle_id == vehicle_id)
        .collect();

    let active: Vec<&ScheduleSlot> = vehicle_slots
        .iter()
        .filter(|s| slot_is_active(s, now))
        .copied()
        .collect();
    if let Some(slot) = chronological_min(&active) {
        return Some(ResolvedSlot {
            slot,
            resolution: Resolution::Active,
        });
    }

    if policy == FallbackPolicy::NextUpcoming {
        let upcoming: Vec<&ScheduleSlot> = vehicle_slots
            .iter()
            .filter(|s| s.time_start.as_str() > now)
            .copied()
            .collect();
        if let Some(slot) = chronological_min(&upcoming) {
            return Some(ResolvedSlot {
                slot,
                resolution: Resolution::Upcoming,
            });
        }
    }

    chronological_min(&vehicle_slots).map(|slot| ResolvedSlot {
        slot,
        resolution: Resolution::FirstOfDay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(vehicle_id: &str, start: &str, end: &str) -> ScheduleSlot {
        ScheduleSlot {
            vehicle_id: vehicle_id.to_string(),
            plate_no: format!("PL-{}", vehicle_id),
            driver: "Tan".to_string(),
            time_start: start.to_string(),
            time_end: end.to_string(),
            current_location: "P201".to_string(),
            status: "Available".to_string(),
            remarks: String::new(),
            last_updated: "2025-03-02 07:00".to_string(),
        }
    }

    /// Slots no solapados que cubren el día completo: para cualquier "ahora"
    /// se resuelve exactamente un slot activo cuyo intervalo contiene "ahora".
    #[test]
    fn test_covering_slots_always_resolve_to_containing_interval() {
        let slots = vec![
            slot("V1", "00:00", "07:59"),
            slot("V1", "08:00", "11:59"),
            slot("V1", "12:00", "17:59"),
            slot("V1", "18:00", "23:59"),
        ];
        for now in ["00:00", "07:59", "08:00", "09:30", "12:00", "23:59"] {
            let resolved =
                resolve_slot(&slots, "V1", now, FallbackPolicy::NextUpcoming).unwrap();
            assert_eq!(resolved.resolution, Resolution::Active, "now={}", now);
            assert!(
                resolved.slot.time_start.as_str() <= now
                    && now <= resolved.slot.time_end.as_str(),
                "now={} not inside [{}, {}]",
                now,
                resolved.slot.time_start,
                resolved.slot.time_end
            );
        }
    }

    #[test]
    fn test_interval_bounds_are_inclusive() {
        let slots = vec![slot("V1", "08:00", "10:00")];
        for now in ["08:00", "10:00"] {
            let resolved =
                resolve_slot(&slots, "V1", now, FallbackPolicy::NextUpcoming).unwrap();
            assert_eq!(resolved.resolution, Resolution::Active);
        }
    }

    #[test]
    fn test_next_upcoming_policy_picks_soonest_future_slot() {
        let slots = vec![
            slot("V1", "14:00", "16:00"),
            slot("V1", "10:00", "11:00"),
        ];
        let resolved =
            resolve_slot(&slots, "V1", "12:30", FallbackPolicy::NextUpcoming).unwrap();
        assert_eq!(resolved.resolution, Resolution::Upcoming);
        assert_eq!(resolved.slot.time_start, "14:00");
    }

    #[test]
    fn test_next_upcoming_policy_falls_back_to_first_of_day_after_last_slot() {
        let slots = vec![
            slot("V1", "10:00", "11:00"),
            slot("V1", "08:00", "09:00"),
        ];
        let resolved =
            resolve_slot(&slots, "V1", "20:00", FallbackPolicy::NextUpcoming).unwrap();
        assert_eq!(resolved.resolution, Resolution::FirstOfDay);
        assert_eq!(resolved.slot.time_start, "08:00");
    }

    #[test]
    fn test_first_of_day_policy_ignores_upcoming_slots() {
        let slots = vec![
            slot("V1", "14:00", "16:00"),
            slot("V1", "08:00", "09:00"),
        ];
        let resolved =
            resolve_slot(&slots, "V1", "12:30", FallbackPolicy::FirstOfDay).unwrap();
        assert_eq!(resolved.resolution, Resolution::FirstOfDay);
        assert_eq!(resolved.slot.time_start, "08:00");
    }

    /// Slots solapados (anomalía de datos): gana el menor (time_start, time_end),
    /// sin importar el orden de carga.
    #[test]
    fn test_overlapping_slots_tie_break_is_deterministic() {
        let mut slots = vec![
            slot("V1", "09:00", "12:00"),
            slot("V1", "08:30", "10:30"),
            slot("V1", "08:30", "09:30"),
        ];
        let resolved =
            resolve_slot(&slots, "V1", "09:15", FallbackPolicy::NextUpcoming).unwrap();
        assert_eq!(
            (resolved.slot.time_start.as_str(), resolved.slot.time_end.as_str()),
            ("08:30", "09:30")
        );

        slots.reverse();
        let resolved =
            resolve_slot(&slots, "V1", "09:15", FallbackPolicy::NextUpcoming).unwrap();
        assert_eq!(
            (resolved.slot.time_start.as_str(), resolved.slot.time_end.as_str()),
            ("08:30", "09:30")
        );
    }

    #[test]
    fn test_other_vehicles_do_not_leak_into_resolution() {
        let slots = vec![
            slot("V2", "08:00", "18:00"),
            slot("V1", "10:00", "11:00"),
        ];
        let resolved =
            resolve_slot(&slots, "V1", "09:00", FallbackPolicy::NextUpcoming).unwrap();
        assert_eq!(resolved.slot.vehicle_id, "V1");
        assert_eq!(resolved.resolution, Resolution::Upcoming);
    }

    #[test]
    fn test_empty_vehicle_slot_set_resolves_to_none() {
        let slots = vec![slot("V2", "08:00", "18:00")];
        assert!(resolve_slot(&slots, "V1", "09:00", FallbackPolicy::NextUpcoming).is_none());
        assert!(resolve_slot(&[], "V1", "09:00", FallbackPolicy::FirstOfDay).is_none());
    }

    #[test]
    fn test_fallback_policy_parsing() {
        assert_eq!(
            "next_upcoming".parse::<FallbackPolicy>().unwrap(),
            FallbackPolicy::NextUpcoming
        );
        assert_eq!(
            "first_of_day".parse::<FallbackPolicy>().unwrap(),
            FallbackPolicy::FirstOfDay
        );
        assert!("latest".parse::<FallbackPolicy>().is_err());
    }
}
