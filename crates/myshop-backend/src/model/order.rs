use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Customer identity sent with every order. The storefront has no login,
/// so orders are always placed on behalf of the guest account.
pub const GUEST_NAME: &str = "Guest";
pub const GUEST_EMAIL: &str = "guest@example.com";
pub const GUEST_ADDRESS: &str = "India";

/// Initial status of every submitted order.
pub const ORDER_STATUS_PENDING: &str = "pending";

/// Type-safe identifier for Orders, assigned by the backend on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One line of an order: a product reference and how many units of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Write-once body for `POST /api/orders`.
///
/// Built at the moment of submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: String,
}

impl OrderPayload {
    /// Builds an order for the placeholder guest customer.
    pub fn for_guest(items: Vec<OrderItem>, total: f64) -> Self {
        Self {
            customer_name: GUEST_NAME.to_string(),
            customer_email: GUEST_EMAIL.to_string(),
            customer_address: GUEST_ADDRESS.to_string(),
            items,
            total,
            status: ORDER_STATUS_PENDING.to_string(),
        }
    }
}

/// Success response from the order endpoint.
///
/// Only the order id is contractually defined; any other fields the backend
/// returns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: OrderId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_order_carries_placeholder_identity() {
        let payload = OrderPayload::for_guest(
            vec![OrderItem {
                product_id: ProductId(1),
                quantity: 2,
            }],
            20.0,
        );
        assert_eq!(payload.customer_name, "Guest");
        assert_eq!(payload.customer_email, "guest@example.com");
        assert_eq!(payload.customer_address, "India");
        assert_eq!(payload.status, "pending");
        assert_eq!(payload.total, 20.0);
    }

    #[test]
    fn payload_wire_format_matches_backend_contract() {
        let payload = OrderPayload::for_guest(
            vec![OrderItem {
                product_id: ProductId(3),
                quantity: 1,
            }],
            9.99,
        );
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["customer_name"], "Guest");
        assert_eq!(value["items"][0]["product_id"], serde_json::json!(3));
        assert_eq!(value["items"][0]["quantity"], serde_json::json!(1));
        assert_eq!(value["total"], serde_json::json!(9.99));
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn receipt_ignores_extra_fields() {
        let json = r#"{"id": 42, "status": "pending", "created_at": "2024-01-01"}"#;
        let receipt: OrderReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.id, OrderId(42));
        assert_eq!(receipt.id.to_string(), "order_42");
    }
}
