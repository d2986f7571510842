//! Controllers del sistema
//!
//! Orquestan repositorios y servicios por debajo de los routers.

pub mod directory_controller;
pub mod whereabout_controller;
