//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos: el directorio de vehículos
//! (fichero plano, solo lectura) y el schedule de pick-up lorries
//! (tabla pickup_schedule, mutable).

pub mod directory;
pub mod schedule;
