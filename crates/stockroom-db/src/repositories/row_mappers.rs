//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::Row;
use stockroom_core::{Product, RepositoryError};

/// Shared SELECT column list for product queries.
pub const PRODUCT_SELECT_COLUMNS: &str =
    "id, name, quantity, price, image_url, image_path, created_at, updated_at";

/// Format a write time for storage.
///
/// Fixed microsecond precision keeps the strings the same width.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored write time.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("bad timestamp '{value}': {e}")))
}

/// Quantities are stored as signed integers.
pub fn quantity_to_db(quantity: u64) -> i64 {
    i64::try_from(quantity).unwrap_or(i64::MAX)
}

/// Parse a database row into a Product.
pub fn row_to_product(row: &sqlx::sqlite::SqliteRow) -> Result<Product, RepositoryError> {
    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let updated_at: String = row
        .try_get("updated_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    // Rows written by other clients may carry a negative count
    let quantity = row
        .try_get::<i64, _>("quantity")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Product {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        quantity: u64::try_from(quantity).unwrap_or(0),
        price: row
            .try_get("price")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        image_url: row
            .try_get("image_url")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        image_path: row
            .try_get("image_path")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_roundtrip_keeps_micros() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 13, 45, 9).unwrap()
            + chrono::Duration::microseconds(123_456);
        let stored = format_timestamp(at);
        assert_eq!(stored, "2024-05-01T13:45:09.123456Z");
        assert_eq!(parse_timestamp(&stored).unwrap(), at);
    }

    #[test]
    fn test_timestamps_sort_as_text() {
        let earlier = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let later = earlier + chrono::Duration::microseconds(1);
        assert!(format_timestamp(earlier) < format_timestamp(later));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn test_quantity_to_db_saturates() {
        assert_eq!(quantity_to_db(7), 7);
        assert_eq!(quantity_to_db(u64::MAX), i64::MAX);
    }
}
