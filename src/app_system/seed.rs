use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::DateTime;
use rust_decimal::Decimal;
use tracing::info;

use crate::config::ConfigError;
use crate::domain::{Coffee, Order, OrderStatus};

/// The catalog served when no catalog file is configured.
pub fn sample_coffees() -> Vec<Coffee> {
    vec![
        Coffee::new("c001", "Espresso", "Espresso", Decimal::new(60, 0), "Intense and well rounded"),
        Coffee::new("c002", "Americano", "Espresso", Decimal::new(65, 0), "Espresso topped with hot water"),
        Coffee::new("c003", "Latte", "Latte", Decimal::new(75, 0), "Espresso with steamed milk"),
    ]
}

/// Order history present in the ledger at startup.
pub fn sample_orders() -> Result<Vec<Order>, chrono::ParseError> {
    let placed_at = DateTime::parse_from_rfc3339("2025-03-03T15:30:45+07:00")?;
    Ok(vec![Order::new("o12345", "c003", 2, placed_at).with_status(OrderStatus::InProgress)])
}

/// Reads a JSON array of coffees in wire format and validates it.
pub fn load_catalog(path: &Path) -> Result<Vec<Coffee>, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadCatalog { path: path.to_path_buf(), source })?;
    let coffees: Vec<Coffee> = serde_json::from_str(&raw)
        .map_err(|source| ConfigError::ParseCatalog { path: path.to_path_buf(), source })?;

    validate_catalog(&coffees)?;
    info!(path = %path.display(), count = coffees.len(), "Catalog loaded");
    Ok(coffees)
}

fn validate_catalog(coffees: &[Coffee]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for coffee in coffees {
        if coffee.id.is_empty() {
            return Err(ConfigError::Validation(format!("coffee `{}` has an empty id", coffee.name)));
        }
        if !seen.insert(coffee.id.as_str()) {
            return Err(ConfigError::Validation(format!("duplicate coffee id `{}`", coffee.id)));
        }
        if coffee.price < Decimal::ZERO {
            return Err(ConfigError::Validation(format!("coffee `{}` has a negative price", coffee.id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write catalog");
        file
    }

    #[test]
    fn sample_catalog_is_valid() {
        assert!(validate_catalog(&sample_coffees()).is_ok());
    }

    #[test]
    fn sample_order_matches_recorded_history() {
        let orders = sample_orders().unwrap();
        let json = serde_json::to_value(&orders[0]).unwrap();
        assert_eq!(json["estimated_delivery"], "2025-03-03T15:40:45+07:00");
        assert_eq!(json["status"], "In Progress");
    }

    #[test]
    fn load_catalog_reads_wire_format() {
        let file = catalog_file(
            r#"[{"id":"m1","name":"Mocha","type":"Latte","price":80,"description":"Chocolate"}]"#,
        );
        let coffees = load_catalog(file.path()).expect("catalog should load");
        assert_eq!(coffees.len(), 1);
        assert_eq!(coffees[0].category, "Latte");
    }

    #[test]
    fn load_catalog_rejects_duplicate_ids() {
        let file = catalog_file(
            r#"[{"id":"m1","name":"Mocha","type":"Latte","price":80,"description":""},
                {"id":"m1","name":"Flat White","type":"Latte","price":70,"description":""}]"#,
        );
        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate coffee id `m1`"));
    }

    #[test]
    fn load_catalog_rejects_negative_prices() {
        let file = catalog_file(
            r#"[{"id":"m1","name":"Mocha","type":"Latte","price":-1,"description":""}]"#,
        );
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn load_catalog_reports_parse_errors() {
        let file = catalog_file("not json");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseCatalog { .. }));
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let err = load_catalog(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadCatalog { .. }));
    }
}
