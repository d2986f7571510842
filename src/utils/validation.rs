//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y normalización de tiempos de pared.

use chrono::NaiveTime;
use validator::ValidationError;

/// Validar y normalizar un tiempo de pared a "HH:MM" con cero a la izquierda.
///
/// Acepta "H:MM", "HH:MM" y "HH:MM:SS"; el resultado siempre es "HH:MM",
/// de modo que la comparación lexicográfica ordena correctamente.
pub fn normalize_hhmm(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| {
            let mut error = ValidationError::new("time");
            error.add_param("value".into(), &trimmed.to_string());
            error.add_param("format".into(), &"HH:MM".to_string());
            error
        })?;
    Ok(parsed.format("%H:%M").to_string())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un intervalo [start, end] esté bien construido (start <= end)
pub fn validate_interval(start: &str, end: &str) -> Result<(), ValidationError> {
    if start > end {
        let mut error = ValidationError::new("interval");
        error.add_param("start".into(), &start.to_string());
        error.add_param("end".into(), &end.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hhmm_pads_and_strips_seconds() {
        assert_eq!(normalize_hhmm("8:05").unwrap(), "08:05");
        assert_eq!(normalize_hhmm("08:05").unwrap(), "08:05");
        assert_eq!(normalize_hhmm("17:30:00").unwrap(), "17:30");
        assert_eq!(normalize_hhmm(" 09:00 ").unwrap(), "09:00");
    }

    #[test]
    fn test_normalize_hhmm_rejects_garbage() {
        assert!(normalize_hhmm("25:00").is_err());
        assert!(normalize_hhmm("9h30").is_err());
        assert!(normalize_hhmm("").is_err());
    }

    #[test]
    fn test_validate_interval() {
        assert!(validate_interval("08:00", "10:00").is_ok());
        assert!(validate_interval("10:00", "10:00").is_ok());
        assert!(validate_interval("10:01", "10:00").is_err());
    }
}
