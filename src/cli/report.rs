//! Plain-text reports printed by the CLI

use crate::checkout::CheckoutQuote;
use crate::core::catalog::Catalog;
use crate::recommend::Recommendation;
use crate::storage::CartProjection;
use std::fmt;

/// Rooms, categories and item counts
pub struct CatalogSummary<'a>(pub &'a Catalog);

impl fmt::Display for CatalogSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for room in self.0.rooms() {
            writeln!(f, "{} ({})", room.room_type.display_name(), room.room_type)?;
            for category in &room.categories {
                writeln!(
                    f,
                    "  {:<20} {:>3} items  [{}]",
                    category.name,
                    category.items.len(),
                    category.id
                )?;
            }
        }
        Ok(())
    }
}

/// One tab per catalog room; rooms with items in the cart are marked `*`
pub struct RoomTabs<'a> {
    pub catalog: &'a Catalog,
    pub cart: &'a CartProjection,
}

impl fmt::Display for RoomTabs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, room_type) in self.catalog.room_types().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            let marker = if self.cart.has_room(room_type) { "*" } else { "" };
            write!(f, "[{}{marker}]", room_type.display_name())?;
        }
        writeln!(f)
    }
}

/// Cart lines grouped by room, followed by the quote
pub struct CartSummary<'a> {
    pub cart: &'a CartProjection,
    pub quote: &'a CheckoutQuote,
}

impl fmt::Display for CartSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cart.is_empty() {
            writeln!(f, "Cart is empty")?;
        }
        for (room_type, entries) in self.cart.entries_by_room() {
            writeln!(f, "{}", room_type.display_name())?;
            for entry in entries {
                writeln!(
                    f,
                    "  #{:<4} {:<16} {:<32} {:>10}",
                    entry.unique_id, entry.category_name, entry.item.name, entry.item.price
                )?;
            }
        }

        let quote = self.quote;
        writeln!(f, "Subtotal  {:>10}", quote.subtotal)?;
        writeln!(f, "Tax       {:>10}", quote.tax)?;
        let shipping_label = if quote.free_shipping { "Shipping (Free)" } else { "Shipping" };
        writeln!(f, "{shipping_label}  {:>10}", quote.shipping)?;
        writeln!(f, "Total     {:>10}", quote.grand_total)
    }
}

pub struct RecommendationList<'a>(pub &'a [Recommendation]);

impl fmt::Display for RecommendationList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in self.0 {
            writeln!(
                f,
                "{:<16} {:<32} {:>10}  {}",
                r.category_name,
                r.item.name,
                r.item.price,
                r.item.manufacturer.as_deref().unwrap_or("")
            )?;
        }
        Ok(())
    }
}
