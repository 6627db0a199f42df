use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// One (inventory reference, quantity) entry within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub inventory_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrder {
    pub supplier_id: Uuid,
    /// May be empty: an order header with zero line items is valid.
    pub items: Vec<OrderLine>,
}

impl CreateOrder {
    pub fn validate(&self) -> Result<(), String> {
        for (idx, line) in self.items.iter().enumerate() {
            if line.quantity <= 0 {
                return Err(format!("items[{}].quantity must be > 0", idx));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(quantities: &[i32]) -> CreateOrder {
        CreateOrder {
            supplier_id: Uuid::new_v4(),
            items: quantities
                .iter()
                .map(|&q| OrderLine {
                    inventory_id: Uuid::new_v4(),
                    quantity: q,
                })
                .collect(),
        }
    }

    #[test]
    fn validate_accepts_empty_item_list() {
        assert!(order(&[]).validate().is_ok());
    }

    #[test]
    fn validate_accepts_positive_quantities() {
        assert!(order(&[1, 3, 7]).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_quantity() {
        let err = order(&[2, 0]).validate().unwrap_err();
        assert!(err.contains("items[1]"), "error should name the bad line: {err}");
    }

    #[test]
    fn validate_rejects_negative_quantity() {
        assert!(order(&[-3]).validate().is_err());
    }

    #[test]
    fn validate_accepts_repeated_inventory_item() {
        // The same item may appear on several lines of one order.
        let inventory_id = Uuid::new_v4();
        let payload = CreateOrder {
            supplier_id: Uuid::new_v4(),
            items: vec![
                OrderLine { inventory_id, quantity: 1 },
                OrderLine { inventory_id, quantity: 2 },
            ],
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn payload_deserializes_with_items() {
        let json = r#"{
            "supplier_id": "00000000-0000-0000-0000-000000000001",
            "items": [
                { "inventory_id": "00000000-0000-0000-0000-000000000002", "quantity": 3 }
            ]
        }"#;
        let p: CreateOrder = serde_json::from_str(json).unwrap();
        assert_eq!(p.items.len(), 1);
        assert_eq!(p.items[0].quantity, 3);
    }

    #[test]
    fn payload_items_preserve_input_order() {
        let json = r#"{
            "supplier_id": "00000000-0000-0000-0000-000000000001",
            "items": [
                { "inventory_id": "00000000-0000-0000-0000-000000000003", "quantity": 1 },
                { "inventory_id": "00000000-0000-0000-0000-000000000002", "quantity": 2 }
            ]
        }"#;
        let p: CreateOrder = serde_json::from_str(json).unwrap();
        let quantities: Vec<i32> = p.items.iter().map(|l| l.quantity).collect();
        assert_eq!(quantities, vec![1, 2]);
    }
}
