//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos de los payloads de la API.

use chrono::{NaiveDate, NaiveDateTime};

use crate::utils::errors::AppError;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parsear una fecha requerida en formato YYYY-MM-DD
pub fn parse_required_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("{} debe tener formato YYYY-MM-DD", field)))
}

/// Parsear una fecha opcional; cadena vacía o ausente se trata como NULL
pub fn parse_optional_date(
    value: Option<&str>,
    field: &str,
) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_required_date(v, field).map(Some),
    }
}

/// Parsear un datetime opcional; acepta los formatos habituales del cliente
pub fn parse_optional_datetime(
    value: Option<&str>,
    field: &str,
) -> Result<Option<NaiveDateTime>, AppError> {
    let value = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(v) => v,
    };

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Some(parsed));
        }
    }

    Err(AppError::BadRequest(format!(
        "{} debe tener formato YYYY-MM-DD HH:MM",
        field
    )))
}

/// Normalizar un número a entero no negativo, con 0 por defecto
pub fn clamp_non_negative(value: Option<i64>) -> i32 {
    value.unwrap_or(0).clamp(0, i32::MAX as i64) as i32
}

/// Texto recortado, o None si está vacío o ausente
pub fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_date() {
        assert_eq!(
            parse_required_date("2024-01-15", "serviceDate").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_required_date("2024/01/15", "serviceDate").is_err());
        assert!(parse_required_date("", "serviceDate").is_err());
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date(None, "purchaseDate").unwrap(), None);
        assert_eq!(parse_optional_date(Some(""), "purchaseDate").unwrap(), None);
        assert_eq!(
            parse_optional_date(Some("  "), "purchaseDate").unwrap(),
            None
        );
        assert!(parse_optional_date(Some("2024-02-30"), "purchaseDate").is_err());
        assert!(parse_optional_date(Some("2024-02-28"), "purchaseDate")
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_parse_optional_datetime_formats() {
        for value in [
            "2024-01-15T08:30",
            "2024-01-15T08:30:00",
            "2024-01-15 08:30",
            "2024-01-15 08:30:00",
        ] {
            let parsed = parse_optional_datetime(Some(value), "departureTime")
                .unwrap()
                .unwrap();
            assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 08:30");
        }

        assert_eq!(
            parse_optional_datetime(None, "departureTime").unwrap(),
            None
        );
        assert!(parse_optional_datetime(Some("mañana"), "departureTime").is_err());
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(clamp_non_negative(None), 0);
        assert_eq!(clamp_non_negative(Some(-5)), 0);
        assert_eq!(clamp_non_negative(Some(120)), 120);
        assert_eq!(clamp_non_negative(Some(i64::MAX)), i32::MAX);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(&"".to_string())), None);
        assert_eq!(non_empty(Some(&"   ".to_string())), None);
        assert_eq!(
            non_empty(Some(&"  Hiace ".to_string())),
            Some("Hiace".to_string())
        );
    }
}
