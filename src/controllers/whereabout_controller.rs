//! Controller del whereabout de pick-up lorries
//!
//! Ciclo por petición: cargar el schedule completo, calcular y (en la
//! actualización) escribir por clave y releer, para que el estado
//! devuelto sea siempre el persistido.

use std::collections::HashSet;

use chrono_tz::Tz;
use sqlx::sqlite::SqlitePool;

use crate::dto::whereabout_dto::{
    AvailableNowResponse, DayScheduleResponse, NowResponse, ScheduleRowResponse, SlotResponse,
    UpdateWhereaboutRequest, WhereaboutFormResponse,
};
use crate::dto::ApiResponse;
use crate::models::schedule::SlotStatus;
use crate::repositories::schedule_repository::ScheduleRepository;
use crate::services::schedule_views::{available_now, day_schedule};
use crate::services::slot_resolver::{resolve_slot, FallbackPolicy};
use crate::utils::errors::AppError;
use crate::utils::time::{hhmm, now_in, stamp};
use crate::utils::validation::normalize_hhmm;

pub struct WhereaboutController {
    repository: ScheduleRepository,
    timezone: Tz,
    fallback_policy: FallbackPolicy,
}

impl WhereaboutController {
    pub fn new(pool: SqlitePool, timezone: Tz, fallback_policy: FallbackPolicy) -> Self {
        Self {
            repository: ScheduleRepository::new(pool),
            timezone,
            fallback_policy,
        }
    }

    /// Caption de tiempo actual localizado
    pub fn now(&self) -> NowResponse {
        let now_dt = now_in(self.timezone);
        NowResponse {
            now: hhmm(&now_dt),
            stamp: stamp(&now_dt),
            timezone: self.timezone.name().to_string(),
        }
    }

    /// Prefill del formulario: el slot editable del vehículo "ahora"
    pub async fn form(&self, vehicle_id: &str) -> Result<WhereaboutFormResponse, AppError> {
        let now = hhmm(&now_in(self.timezone));
        let slots = self.repository.load_all().await?;

        let resolved = resolve_slot(&slots, vehicle_id, &now, self.fallback_policy)
            .ok_or_else(|| {
                AppError::NoActiveSlot(format!(
                    "No time slot found for vehicle '{}' today",
                    vehicle_id
                ))
            })?;

        Ok(WhereaboutFormResponse {
            now,
            resolution: resolved.resolution,
            slot: SlotResponse::from(resolved.slot),
        })
    }

    /// Transacción de actualización de whereabout: UPDATE por clave en una
    /// sola sentencia, y relectura de la fila escrita.
    pub async fn update(
        &self,
        request: UpdateWhereaboutRequest,
    ) -> Result<ApiResponse<SlotResponse>, AppError> {
        let status = request
            .status
            .parse::<SlotStatus>()
            .map_err(AppError::Validation)?;
        let time_start = normalize_hhmm(&request.time_start).map_err(|_| {
            AppError::Validation(format!(
                "Invalid time_start '{}', expected HH:MM",
                request.time_start
            ))
        })?;

        let now_dt = now_in(self.timezone);
        let affected = self
            .repository
            .update_whereabout(
                &request.vehicle_id,
                &time_start,
                request.current_location.trim(),
                status.as_str(),
                request.remarks.trim(),
                &stamp(&now_dt),
            )
            .await?;

        if affected == 0 {
            return Err(AppError::NoActiveSlot(format!(
                "No active time slot found for vehicle '{}' at {}",
                request.vehicle_id, time_start
            )));
        }

        // La actualización debe ser visible inmediatamente: releer la fila
        let slot = self
            .repository
            .find_by_key(&request.vehicle_id, &time_start)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Slot '{}' at {} vanished after update",
                    request.vehicle_id, time_start
                ))
            })?;

        Ok(ApiResponse::success_with_message(
            SlotResponse::from(slot),
            "Whereabout updated and saved".to_string(),
        ))
    }

    /// Vista Available-Now
    pub async fn available_now(&self) -> Result<AvailableNowResponse, AppError> {
        let now = hhmm(&now_in(self.timezone));
        let slots = self.repository.load_all().await?;
        let lorries = available_now(&slots, &now)
            .into_iter()
            .map(SlotResponse::from)
            .collect();
        Ok(AvailableNowResponse { now, lorries })
    }

    /// Vista Day Schedule, opcionalmente filtrada a un subconjunto de vehículos
    pub async fn schedule(
        &self,
        vehicles: Option<String>,
    ) -> Result<DayScheduleResponse, AppError> {
        let now = hhmm(&now_in(self.timezone));
        let slots = self.repository.load_all().await?;

        let subset: Option<HashSet<String>> = vehicles.map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        let rows = day_schedule(&slots, subset.as_ref(), &now)
            .into_iter()
            .map(|entry| ScheduleRowResponse {
                slot: SlotResponse::from(entry.slot),
                active_now: entry.active_now,
            })
            .collect();
        Ok(DayScheduleResponse { now, rows })
    }
}
