//! Carga del directorio de vehículos
//!
//! El fichero plano se lee una vez al arranque del proceso y el resultado
//! se comparte por referencia vía AppState durante toda la vida del
//! proceso. Fuente estática: sin reescritura, sin invalidación.

use std::path::Path;

use crate::models::directory::VehicleRecord;
use crate::utils::errors::{data_load_error, AppError};

/// Leer el fichero del directorio completo
pub fn load_directory(path: &Path) -> Result<Vec<VehicleRecord>, AppError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| data_load_error(&path.display().to_string(), e))?;

    let mut records = Vec::new();
    for row in reader.deserialize::<VehicleRecord>() {
        let record = row.map_err(|e| data_load_error(&path.display().to_string(), e))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_directory_reads_all_columns() {
        let mut file = std::env::temp_dir();
        file.push("fleet_visibility_dir_test.csv");
        let mut f = std::fs::File::create(&file).unwrap();
        writeln!(
            f,
            "vehicle_id,vehicle_type,plate_no,status,current_location,assigned_to,purpose,last_update"
        )
        .unwrap();
        writeln!(
            f,
            "V1,Lorry,GBA1234X,Available,P201,Tan Ah Kow,Material pickup,2025-03-02 08:00"
        )
        .unwrap();
        drop(f);

        let records = load_directory(&file).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vehicle_id, "V1");
        assert_eq!(records[0].plate_no, "GBA1234X");
        assert_eq!(records[0].status, "Available");

        std::fs::remove_file(&file).ok();
    }

    #[test]
    fn test_load_directory_missing_file_is_data_load_error() {
        let result = load_directory(Path::new("data/does_not_exist.csv"));
        assert!(matches!(result, Err(AppError::DataLoad(_))));
    }
}
