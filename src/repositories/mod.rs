//! Repositorios de acceso a datos
//!
//! El directorio se carga desde un fichero plano; el schedule vive en la
//! tabla pickup_schedule de SQLite.

pub mod directory_repository;
pub mod schedule_repository;
