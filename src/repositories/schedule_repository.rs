//! Repositorio de la tabla pickup_schedule
//!
//! La clave natural de un slot es (vehicle_id, time_start). La escritura
//! de whereabout es un UPDATE por clave en una sola sentencia atómica:
//! dos drivers actualizando slots de vehículos distintos en la misma
//! ventana no pueden pisarse la tabla entera.

use std::path::Path;

use sqlx::sqlite::SqlitePool;

use crate::models::schedule::ScheduleSlot;
use crate::utils::errors::{data_load_error, AppError};
use crate::utils::validation::{normalize_hhmm, validate_interval};

pub struct ScheduleRepository {
    pool: SqlitePool,
}

impl ScheduleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Crear la tabla pickup_schedule si no existe
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pickup_schedule (
                vehicle_id       TEXT NOT NULL,
                plate_no         TEXT NOT NULL,
                driver           TEXT NOT NULL,
                time_start       TEXT NOT NULL,
                time_end         TEXT NOT NULL,
                current_location TEXT NOT NULL,
                status           TEXT NOT NULL,
                remarks          TEXT NOT NULL DEFAULT '',
                last_updated     TEXT NOT NULL,
                PRIMARY KEY (vehicle_id, time_start)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Cargar el schedule completo del día, en orden cronológico
    pub async fn load_all(&self) -> Result<Vec<ScheduleSlot>, AppError> {
        let slots = sqlx::query_as::<_, ScheduleSlot>(
            "SELECT * FROM pickup_schedule ORDER BY vehicle_id, time_start",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(slots)
    }

    /// Buscar un slot por su clave natural
    pub async fn find_by_key(
        &self,
        vehicle_id: &str,
        time_start: &str,
    ) -> Result<Option<ScheduleSlot>, AppError> {
        let slot = sqlx::query_as::<_, ScheduleSlot>(
            "SELECT * FROM pickup_schedule WHERE vehicle_id = ? AND time_start = ?",
        )
        .bind(vehicle_id)
        .bind(time_start)
        .fetch_optional(&self.pool)
        .await?;
        Ok(slot)
    }

    /// Aplicar la tripleta (location, status, remarks) al slot identificado
    /// por su clave y sellar last_updated. Devuelve las filas afectadas:
    /// 0 significa que el slot resuelto ya no existe en la tabla.
    pub async fn update_whereabout(
        &self,
        vehicle_id: &str,
        time_start: &str,
        current_location: &str,
        status: &str,
        remarks: &str,
        last_updated: &str,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE pickup_schedule
            SET current_location = ?, status = ?, remarks = ?, last_updated = ?
            WHERE vehicle_id = ? AND time_start = ?
            "#,
        )
        .bind(current_location)
        .bind(status)
        .bind(remarks)
        .bind(last_updated)
        .bind(vehicle_id)
        .bind(time_start)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(format!("Error updating whereabout: {}", e)))?;

        Ok(result.rows_affected())
    }

    /// Número de slots en la tabla
    pub async fn count(&self) -> Result<i64, AppError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pickup_schedule")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    /// Insertar un slot (carga inicial)
    pub async fn insert_slot(&self, slot: &ScheduleSlot) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO pickup_schedule
                (vehicle_id, plate_no, driver, time_start, time_end,
                 current_location, status, remarks, last_updated)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&slot.vehicle_id)
        .bind(&slot.plate_no)
        .bind(&slot.driver)
        .bind(&slot.time_start)
        .bind(&slot.time_end)
        .bind(&slot.current_location)
        .bind(&slot.status)
        .bind(&slot.remarks)
        .bind(&slot.last_updated)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(format!("Error inserting slot: {}", e)))?;
        Ok(())
    }

    /// Sembrar la tabla desde un CSV si está vacía. Los tiempos se
    /// normalizan a "HH:MM" y se valida time_start <= time_end.
    /// Devuelve el número de filas insertadas.
    pub async fn seed_from_csv(&self, path: &Path) -> Result<usize, AppError> {
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| data_load_error(&path.display().to_string(), e))?;

        let mut inserted = 0;
        for row in reader.deserialize::<ScheduleSlot>() {
            let mut slot = row.map_err(|e| data_load_error(&path.display().to_string(), e))?;
            slot.time_start = normalize_hhmm(&slot.time_start).map_err(|_| {
                data_load_error(
                    &path.display().to_string(),
                    format!("bad time_start '{}'", slot.time_start),
                )
            })?;
            slot.time_end = normalize_hhmm(&slot.time_end).map_err(|_| {
                data_load_error(
                    &path.display().to_string(),
                    format!("bad time_end '{}'", slot.time_end),
                )
            })?;
            validate_interval(&slot.time_start, &slot.time_end).map_err(|_| {
                data_load_error(
                    &path.display().to_string(),
                    format!(
                        "slot {}/{} ends before it starts",
                        slot.vehicle_id, slot.time_start
                    ),
                )
            })?;
            self.insert_slot(&slot).await?;
            inserted += 1;
        }
        Ok(inserted)
    }
}
