//! Room-Furnish: multi-room furniture selection store
//!
//! Keeps, for every room of a catalog, the furniture a user has chosen and
//! the item each category is previewing, and derives a cart from it.
//!
//! # Core Concepts
//!
//! - **Catalog**: Rooms, their categories and the items on offer
//! - **Selection events**: Every change to a room is an immutable event
//! - **Cart projection**: A view over chosen items, rebuilt from events
//! - **Presets**: Furnished rooms loaded into a room in one step
//!
//! # Example
//!
//! ```no_run
//! use room_furnish::prelude::*;
//!
//! # fn example() -> room_furnish::error::Result<()> {
//! let catalog = Catalog::load("data/catalog.json")?;
//! let mut store = SelectionStore::new(catalog);
//!
//! let sofa = store
//!     .catalog()
//!     .item(RoomType::LivingRoom, CategoryId::Sofas, 1)
//!     .cloned()
//!     .ok_or_else(|| Error::Catalog("no sofa".to_string()))?;
//! store.add_to_chosen(RoomType::LivingRoom, CategoryId::Sofas, &sofa);
//!
//! let quote = CheckoutQuote::from_cart(store.cart(), &CheckoutPolicy::default());
//! println!("{}", quote.grand_total);
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod filter;
pub mod ratings;
pub mod recommend;
pub mod render;
pub mod storage;

/// Main selection store
pub mod store;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::checkout::*;
    pub use crate::config::ShopConfig;
    pub use crate::core::*;
    pub use crate::error::{Error, Result};
    pub use crate::filter::*;
    pub use crate::ratings::*;
    pub use crate::recommend::*;
    pub use crate::render::*;
    pub use crate::storage::*;
    pub use crate::store::{PresetReport, SelectionStore};
}
