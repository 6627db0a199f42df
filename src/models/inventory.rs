use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An inventory item. At most one row exists per (lowercased trimmed name,
/// category_id) pair; that row carries the aggregate quantity for the
/// logical item. The stored name keeps the caller's original casing, trimmed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    /// Price stored as integer cents (e.g. 999 = $9.99)
    pub price_cents: i64,
    pub category_id: Uuid,
    pub threshold_quantity: i32,
    pub unit_of_measurement: String,
    pub supplier_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inventory joined with category and supplier names for richer listings.
/// `supplier_name` is None for items without a supplier; such items still
/// appear in listings.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct InventoryItemWithNames {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price_cents: i64,
    pub category_id: Uuid,
    pub threshold_quantity: i32,
    pub unit_of_measurement: String,
    pub supplier_id: Option<Uuid>,
    pub category_name: String,
    pub supplier_name: Option<String>,
}

// ── Request payload ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpsertInventoryItem {
    pub name: String,
    pub quantity: i32,
    /// Price in cents
    pub price_cents: i64,
    pub category_id: Uuid,
    pub threshold_quantity: i32,
    pub unit_of_measurement: String,
    pub supplier_id: Option<Uuid>,
}

impl UpsertInventoryItem {
    /// Name as stored: trimmed, original casing. The lowercase form exists
    /// only inside the unique index used for matching.
    pub fn storage_name(&self) -> &str {
        self.name.trim()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.storage_name().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.quantity < 0 {
            return Err("quantity must be >= 0".to_string());
        }
        if self.price_cents < 0 {
            return Err("price_cents must be >= 0".to_string());
        }
        if self.threshold_quantity < 0 {
            return Err("threshold_quantity must be >= 0".to_string());
        }
        Ok(())
    }
}

/// Whether an upsert created a fresh row or incremented an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

impl UpsertOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            UpsertOutcome::Created => "created",
            UpsertOutcome::Updated => "updated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, quantity: i32) -> UpsertInventoryItem {
        UpsertInventoryItem {
            name: name.to_string(),
            quantity,
            price_cents: 100,
            category_id: Uuid::new_v4(),
            threshold_quantity: 5,
            unit_of_measurement: "unit".to_string(),
            supplier_id: None,
        }
    }

    #[test]
    fn storage_name_trims_whitespace() {
        assert_eq!(payload("  Apples  ", 1).storage_name(), "Apples");
    }

    #[test]
    fn storage_name_keeps_casing() {
        assert_eq!(payload("ApPlEs", 1).storage_name(), "ApPlEs");
    }

    #[test]
    fn validate_accepts_reasonable_payload() {
        assert!(payload("Apples", 10).validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert!(payload("   ", 1).validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_quantity() {
        assert!(payload("Apples", -1).validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut p = payload("Apples", 1);
        p.price_cents = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_threshold() {
        let mut p = payload("Apples", 1);
        p.threshold_quantity = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn validate_allows_zero_quantity() {
        assert!(payload("Apples", 0).validate().is_ok());
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(UpsertOutcome::Created.as_str(), "created");
        assert_eq!(UpsertOutcome::Updated.as_str(), "updated");
    }

    #[test]
    fn payload_deserializes_without_supplier() {
        let json = r#"{
            "name": "Apples",
            "quantity": 10,
            "price_cents": 250,
            "category_id": "00000000-0000-0000-0000-000000000001",
            "threshold_quantity": 5,
            "unit_of_measurement": "kg"
        }"#;
        let p: UpsertInventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(p.supplier_id, None);
        assert_eq!(p.quantity, 10);
    }
}
