//! Utilidades de tiempo localizado
//!
//! Todo el cálculo de "ahora" se localiza a una única zona IANA configurada
//! (por defecto Asia/Singapore). La granularidad de trabajo es "HH:MM".

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Formato del sello `last_updated`
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Obtener el instante actual en la zona configurada
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// Tiempo de pared "HH:MM" de un instante localizado
pub fn hhmm(dt: &DateTime<Tz>) -> String {
    dt.format("%H:%M").to_string()
}

/// Sello de mutación "YYYY-MM-DD HH:MM" de un instante localizado
pub fn stamp(dt: &DateTime<Tz>) -> String {
    dt.format(STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_hhmm_is_zero_padded() {
        let tz: Tz = "Asia/Singapore".parse().unwrap();
        let dt = tz.with_ymd_and_hms(2025, 3, 2, 8, 5, 0).unwrap();
        assert_eq!(hhmm(&dt), "08:05");
    }

    #[test]
    fn test_stamp_format() {
        let tz: Tz = "Asia/Singapore".parse().unwrap();
        let dt = tz.with_ymd_and_hms(2025, 3, 2, 17, 45, 12).unwrap();
        assert_eq!(stamp(&dt), "2025-03-02 17:45");
    }
}
