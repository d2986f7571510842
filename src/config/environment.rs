//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen un default de desarrollo razonable.

use std::env;

use chrono_tz::Tz;

use crate::services::slot_resolver::FallbackPolicy;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub directory_csv: String,
    pub schedule_seed_csv: String,
    /// Zona IANA para todo cálculo de "ahora" (regla de configuración,
    /// no de negocio)
    pub timezone: Tz,
    /// Política de fallback del resolver cuando ningún slot está activo
    pub fallback_policy: FallbackPolicy,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://data/pickup.db?mode=rwc".to_string()),
            directory_csv: env::var("DIRECTORY_CSV")
                .unwrap_or_else(|_| "data/vehicles.csv".to_string()),
            schedule_seed_csv: env::var("SCHEDULE_SEED_CSV")
                .unwrap_or_else(|_| "data/schedule_seed.csv".to_string()),
            timezone: env::var("TIMEZONE")
                .unwrap_or_else(|_| "Asia/Singapore".to_string())
                .parse()
                .expect("TIMEZONE must be a valid IANA zone name"),
            fallback_policy: env::var("FALLBACK_POLICY")
                .unwrap_or_else(|_| "next_upcoming".to_string())
                .parse()
                .expect("FALLBACK_POLICY must be 'next_upcoming' or 'first_of_day'"),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
