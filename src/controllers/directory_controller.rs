//! Controller del directorio de vehículos
//!
//! Camino de solo lectura sobre el snapshot cargado al arranque:
//! listado con filtros de faceta, opciones de faceta, KPIs y detalle.

use std::collections::HashSet;
use std::sync::Arc;

use crate::dto::directory_dto::{
    DirectoryFacetsResponse, DirectoryFilters, DirectoryStatsResponse, VehicleRecordResponse,
};
use crate::models::directory::VehicleRecord;
use crate::utils::errors::{not_found_error, AppError};

pub struct DirectoryController {
    directory: Arc<Vec<VehicleRecord>>,
}

/// Parsear una faceta multiselect "a,b,c" a un conjunto; None no restringe
fn parse_facet(raw: &Option<String>) -> Option<HashSet<String>> {
    raw.as_ref().map(|v| {
        v.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}

impl DirectoryController {
    pub fn new(directory: Arc<Vec<VehicleRecord>>) -> Self {
        Self { directory }
    }

    /// Listado filtrado por vehicle_type y status
    pub fn list(&self, filters: &DirectoryFilters) -> Vec<VehicleRecordResponse> {
        let types = parse_facet(&filters.vehicle_type);
        let statuses = parse_facet(&filters.status);

        self.directory
            .iter()
            .filter(|r| types.as_ref().map_or(true, |set| set.contains(&r.vehicle_type)))
            .filter(|r| statuses.as_ref().map_or(true, |set| set.contains(&r.status)))
            .map(VehicleRecordResponse::from)
            .collect()
    }

    /// Opciones de faceta: valores distintos, ordenados
    pub fn facets(&self) -> DirectoryFacetsResponse {
        let mut vehicle_types: Vec<String> = self
            .directory
            .iter()
            .map(|r| r.vehicle_type.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        vehicle_types.sort();

        let mut statuses: Vec<String> = self
            .directory
            .iter()
            .map(|r| r.status.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        statuses.sort();

        DirectoryFacetsResponse {
            vehicle_types,
            statuses,
        }
    }

    /// Contadores KPI sobre el directorio completo (sin filtrar)
    pub fn stats(&self) -> DirectoryStatsResponse {
        DirectoryStatsResponse {
            total: self.directory.len(),
            available: self
                .directory
                .iter()
                .filter(|r| r.status == "Available")
                .count(),
            in_use: self
                .directory
                .iter()
                .filter(|r| r.status == "In Use")
                .count(),
        }
    }

    /// Detalle de un registro por vehicle_id
    pub fn get(&self, vehicle_id: &str) -> Result<VehicleRecordResponse, AppError> {
        self.directory
            .iter()
            .find(|r| r.vehicle_id == vehicle_id)
            .map(VehicleRecordResponse::from)
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, vehicle_type: &str, status: &str) -> VehicleRecord {
        VehicleRecord {
            vehicle_id: id.to_string(),
            vehicle_type: vehicle_type.to_string(),
            plate_no: format!("PL-{}", id),
            status: status.to_string(),
            current_location: "HQ".to_string(),
            assigned_to: "Lim".to_string(),
            purpose: "General".to_string(),
            last_update: "2025-03-02 08:00".to_string(),
        }
    }

    fn controller() -> DirectoryController {
        DirectoryController::new(Arc::new(vec![
            record("V1", "Lorry", "Available"),
            record("V2", "Van", "In Use"),
            record("V3", "Lorry", "In Use"),
        ]))
    }

    #[test]
    fn test_list_without_filters_returns_everything() {
        let all = controller().list(&DirectoryFilters::default());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_list_applies_both_facets_conjunctively() {
        let filters = DirectoryFilters {
            vehicle_type: Some("Lorry".to_string()),
            status: Some("In Use".to_string()),
        };
        let filtered = controller().list(&filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].vehicle_id, "V3");
    }

    #[test]
    fn test_list_facet_accepts_comma_separated_values() {
        let filters = DirectoryFilters {
            vehicle_type: Some("Lorry,Van".to_string()),
            status: None,
        };
        assert_eq!(controller().list(&filters).len(), 3);
    }

    #[test]
    fn test_stats_counts() {
        let stats = controller().stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.available, 1);
        assert_eq!(stats.in_use, 2);
    }

    #[test]
    fn test_facets_are_distinct_and_sorted() {
        let facets = controller().facets();
        assert_eq!(facets.vehicle_types, vec!["Lorry", "Van"]);
        assert_eq!(facets.statuses, vec!["Available", "In Use"]);
    }

    #[test]
    fn test_get_unknown_vehicle_is_not_found() {
        assert!(matches!(
            controller().get("V9"),
            Err(AppError::NotFound(_))
        ));
    }
}
