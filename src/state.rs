//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El directorio de vehículos se carga una
//! vez al arranque y se comparte por referencia; no hay cache global
//! mutable ni invalidación.

use std::sync::Arc;

use sqlx::sqlite::SqlitePool;

use crate::config::environment::EnvironmentConfig;
use crate::models::directory::VehicleRecord;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub directory: Arc<Vec<VehicleRecord>>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig, directory: Vec<VehicleRecord>) -> Self {
        Self {
            pool,
            config,
            directory: Arc::new(directory),
        }
    }
}
