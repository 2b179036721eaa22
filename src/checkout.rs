//! Checkout quote: subtotal, tax and shipping for the current cart

use crate::core::catalog::RoomType;
use crate::core::money::Price;
use crate::storage::CartProjection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax and shipping rules applied at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutPolicy {
    /// Tax rate as a fraction, 0.08 for 8%
    pub tax_rate: Decimal,
    /// Subtotals strictly above this ship for free
    pub free_shipping_threshold: Price,
    pub flat_shipping: Price,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(8, 2),
            free_shipping_threshold: Price::from_cents(100_000),
            flat_shipping: Price::from_cents(9_900),
        }
    }
}

/// Per-room line in the order summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSubtotal {
    pub room_type: RoomType,
    pub room_name: String,
    pub item_count: usize,
    pub subtotal: Price,
}

/// Order summary handed to the checkout form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    pub item_count: usize,
    pub rooms: Vec<RoomSubtotal>,
    pub subtotal: Price,
    pub tax: Price,
    pub shipping: Price,
    pub free_shipping: bool,
    pub grand_total: Price,
}

impl CheckoutQuote {
    /// Quote a bare subtotal, with no per-room breakdown
    pub fn from_subtotal(subtotal: Price, policy: &CheckoutPolicy) -> Self {
        let tax = subtotal.scaled(policy.tax_rate);
        let free_shipping = subtotal > policy.free_shipping_threshold;
        let shipping = if free_shipping {
            Price::ZERO
        } else {
            policy.flat_shipping
        };

        Self {
            item_count: 0,
            rooms: Vec::new(),
            subtotal,
            tax,
            shipping,
            free_shipping,
            grand_total: subtotal + tax + shipping,
        }
    }

    /// Quote the whole cart, grouped by room
    pub fn from_cart(cart: &CartProjection, policy: &CheckoutPolicy) -> Self {
        let rooms = cart
            .entries_by_room()
            .into_iter()
            .map(|(room_type, entries)| RoomSubtotal {
                room_type,
                room_name: room_type.display_name().to_string(),
                item_count: entries.len(),
                subtotal: entries.iter().map(|e| e.price()).sum(),
            })
            .collect();

        Self {
            item_count: cart.len(),
            rooms,
            ..Self::from_subtotal(cart.total(), policy)
        }
    }
}
