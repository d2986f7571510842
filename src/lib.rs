//! Fleet Visibility Backend
//!
//! Backend de visibilidad de flota: directorio de vehículos (solo lectura)
//! y scheduler de pick-up lorries con actualización de whereabout.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
