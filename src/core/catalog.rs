//! Static furniture catalog: room type -> categories -> items
//!
//! The catalog is loaded once, validated, and never mutated afterwards.
//! Room types and category ids are closed enumerations so that a typo in
//! the catalog document is caught at load time instead of silently creating
//! a new bucket.

use crate::core::money::Price;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Known room types, in the order the shop presents them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    LivingRoom,
    DiningRoom,
    Bedroom,
    Bathroom,
    Kitchen,
    Office,
    Patio,
}

impl RoomType {
    pub const ALL: [RoomType; 7] = [
        RoomType::LivingRoom,
        RoomType::DiningRoom,
        RoomType::Bedroom,
        RoomType::Bathroom,
        RoomType::Kitchen,
        RoomType::Office,
        RoomType::Patio,
    ];

    /// Identifier as it appears in catalog documents
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::LivingRoom => "living-room",
            RoomType::DiningRoom => "dining-room",
            RoomType::Bedroom => "bedroom",
            RoomType::Bathroom => "bathroom",
            RoomType::Kitchen => "kitchen",
            RoomType::Office => "office",
            RoomType::Patio => "patio",
        }
    }

    /// Short name shown in the room tabs and cart groups
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomType::LivingRoom => "Living",
            RoomType::DiningRoom => "Dining",
            RoomType::Bedroom => "Bedroom",
            RoomType::Bathroom => "Bathroom",
            RoomType::Kitchen => "Kitchen",
            RoomType::Office => "Office",
            RoomType::Patio => "Patio",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RoomType::ALL
            .iter()
            .copied()
            .find(|room| room.as_str() == s)
            .ok_or_else(|| Error::unknown("room type", s))
    }
}

/// Known furniture category ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    Sofas,
    Chairs,
    CoffeeTables,
    Lamps,
    Rugs,
    TvStands,
    Beds,
    Nightstands,
    Dressers,
    DiningTables,
    DiningChairs,
    Buffets,
    Desks,
    OfficeChairs,
    Bookcases,
    Vanities,
    BathroomStorage,
    BathroomFixtures,
    KitchenIslands,
    BarStools,
    KitchenStorage,
    OutdoorSeating,
    OutdoorTables,
    OutdoorLighting,
}

impl CategoryId {
    pub const ALL: [CategoryId; 24] = [
        CategoryId::Sofas,
        CategoryId::Chairs,
        CategoryId::CoffeeTables,
        CategoryId::Lamps,
        CategoryId::Rugs,
        CategoryId::TvStands,
        CategoryId::Beds,
        CategoryId::Nightstands,
        CategoryId::Dressers,
        CategoryId::DiningTables,
        CategoryId::DiningChairs,
        CategoryId::Buffets,
        CategoryId::Desks,
        CategoryId::OfficeChairs,
        CategoryId::Bookcases,
        CategoryId::Vanities,
        CategoryId::BathroomStorage,
        CategoryId::BathroomFixtures,
        CategoryId::KitchenIslands,
        CategoryId::BarStools,
        CategoryId::KitchenStorage,
        CategoryId::OutdoorSeating,
        CategoryId::OutdoorTables,
        CategoryId::OutdoorLighting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Sofas => "sofas",
            CategoryId::Chairs => "chairs",
            CategoryId::CoffeeTables => "coffee-tables",
            CategoryId::Lamps => "lamps",
            CategoryId::Rugs => "rugs",
            CategoryId::TvStands => "tv-stands",
            CategoryId::Beds => "beds",
            CategoryId::Nightstands => "nightstands",
            CategoryId::Dressers => "dressers",
            CategoryId::DiningTables => "dining-tables",
            CategoryId::DiningChairs => "dining-chairs",
            CategoryId::Buffets => "buffets",
            CategoryId::Desks => "desks",
            CategoryId::OfficeChairs => "office-chairs",
            CategoryId::Bookcases => "bookcases",
            CategoryId::Vanities => "vanities",
            CategoryId::BathroomStorage => "bathroom-storage",
            CategoryId::BathroomFixtures => "bathroom-fixtures",
            CategoryId::KitchenIslands => "kitchen-islands",
            CategoryId::BarStools => "bar-stools",
            CategoryId::KitchenStorage => "kitchen-storage",
            CategoryId::OutdoorSeating => "outdoor-seating",
            CategoryId::OutdoorTables => "outdoor-tables",
            CategoryId::OutdoorLighting => "outdoor-lighting",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CategoryId::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::unknown("category", s))
    }
}

/// A purchasable catalog item. Identity is `id` within its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

/// Ordered item list of one furniture category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

impl Category {
    /// Find an item by id
    pub fn item(&self, item_id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Default preview item, absent for an empty category
    pub fn first_item(&self) -> Option<&CatalogItem> {
        self.items.first()
    }

    /// Whether `item` is exactly one of this category's items
    pub fn contains(&self, item: &CatalogItem) -> bool {
        self.item(item.id).is_some_and(|known| known == item)
    }
}

/// Categories offered for one room type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCatalog {
    pub room_type: RoomType,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl RoomCatalog {
    pub fn category(&self, category_id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Position of a category in declared order
    pub fn category_position(&self, category_id: CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| c.id == category_id)
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    rooms: Vec<RoomCatalog>,
}

/// Validated, read-only furniture catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument")]
pub struct Catalog {
    rooms: Vec<RoomCatalog>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = Error;

    fn try_from(doc: CatalogDocument) -> Result<Self> {
        Catalog::new(doc.rooms)
    }
}

impl Catalog {
    /// Build a catalog, validating room, category and item uniqueness
    pub fn new(rooms: Vec<RoomCatalog>) -> Result<Self> {
        let mut seen_rooms = HashSet::new();
        for room in &rooms {
            if !seen_rooms.insert(room.room_type) {
                return Err(Error::Catalog(format!(
                    "room type {} declared twice",
                    room.room_type
                )));
            }

            let mut seen_categories = HashSet::new();
            for category in &room.categories {
                if !seen_categories.insert(category.id) {
                    return Err(Error::Catalog(format!(
                        "category {} declared twice in {}",
                        category.id, room.room_type
                    )));
                }

                let mut seen_items = HashSet::new();
                for item in &category.items {
                    if !seen_items.insert(item.id) {
                        return Err(Error::Catalog(format!(
                            "item {} declared twice in {}/{}",
                            item.id, room.room_type, category.id
                        )));
                    }
                }
            }
        }

        Ok(Self { rooms })
    }

    /// Catalog with no rooms
    pub fn empty() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            rooms = catalog.rooms.len(),
            items = catalog.item_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Rooms in declared order
    pub fn rooms(&self) -> &[RoomCatalog] {
        &self.rooms
    }

    pub fn room_types(&self) -> impl Iterator<Item = RoomType> + '_ {
        self.rooms.iter().map(|room| room.room_type)
    }

    pub fn room(&self, room_type: RoomType) -> Option<&RoomCatalog> {
        self.rooms.iter().find(|room| room.room_type == room_type)
    }

    pub fn room_position(&self, room_type: RoomType) -> Option<usize> {
        self.rooms.iter().position(|room| room.room_type == room_type)
    }

    pub fn category(&self, room_type: RoomType, category_id: CategoryId) -> Option<&Category> {
        self.room(room_type)?.category(category_id)
    }

    /// Resolve an item reference, `None` if room, category or item is unknown
    pub fn item(
        &self,
        room_type: RoomType,
        category_id: CategoryId,
        item_id: u32,
    ) -> Option<&CatalogItem> {
        self.category(room_type, category_id)?.item(item_id)
    }

    /// Total number of items across all rooms
    pub fn item_count(&self) -> usize {
        self.rooms
            .iter()
            .flat_map(|room| room.categories.iter())
            .map(|category| category.items.len())
            .sum()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn item(id: u32, name: &str, price: &str) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            price: price.parse().unwrap(),
            image: format!("/assets/furniture/{id}.png"),
            manufacturer: None,
        }
    }

    /// Small two-room catalog shared by the unit tests.
    pub(crate) fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            RoomCatalog {
                room_type: RoomType::LivingRoom,
                categories: vec![
                    Category {
                        id: CategoryId::Sofas,
                        name: "Sofas".to_string(),
                        items: vec![
                            item(1, "Gray Sectional", "1299.00"),
                            item(5, "Black Modern Sofa", "540.00"),
                        ],
                    },
                    Category {
                        id: CategoryId::Chairs,
                        name: "Chairs".to_string(),
                        items: vec![
                            item(3, "Gray Modern Chair", "89.99"),
                            item(4, "Lounge Chair", "249.50"),
                        ],
                    },
                    Category {
                        id: CategoryId::Rugs,
                        name: "Rugs".to_string(),
                        items: vec![],
                    },
                ],
            },
            RoomCatalog {
                room_type: RoomType::Bedroom,
                categories: vec![
                    Category {
                        id: CategoryId::Beds,
                        name: "Beds".to_string(),
                        items: vec![item(1, "Queen Platform Bed", "799.00")],
                    },
                    Category {
                        id: CategoryId::Chairs,
                        name: "Reading Chairs".to_string(),
                        items: vec![item(3, "Gray Modern Chair", "89.99")],
                    },
                ],
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.room_types().collect::<Vec<_>>(), vec![RoomType::LivingRoom, RoomType::Bedroom]);
        assert_eq!(
            catalog.item(RoomType::LivingRoom, CategoryId::Sofas, 5).unwrap().name,
            "Black Modern Sofa"
        );
        assert!(catalog.item(RoomType::LivingRoom, CategoryId::Beds, 1).is_none());
        assert!(catalog.item(RoomType::Office, CategoryId::Desks, 1).is_none());
        assert_eq!(catalog.room_position(RoomType::Bedroom), Some(1));
        assert_eq!(catalog.item_count(), 6);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "rooms": [{
                "roomType": "living-room",
                "categories": [{
                    "id": "coffee-tables",
                    "name": "Coffee Tables",
                    "items": [
                        {"id": 1, "name": "White Triangular Table", "price": 199.99, "image": "/t.png", "manufacturer": "Bernhardt"}
                    ]
                }]
            }]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let table = catalog.item(RoomType::LivingRoom, CategoryId::CoffeeTables, 1).unwrap();
        assert_eq!(table.price.to_string(), "199.99");
        assert_eq!(table.manufacturer.as_deref(), Some("Bernhardt"));
    }

    #[test]
    fn test_rejects_unrepresentable_prices() {
        let with_price = |price: &str| {
            format!(
                r#"{{"rooms": [{{"roomType": "office", "categories": [{{"id": "desks", "name": "Desks",
                    "items": [{{"id": 1, "name": "Desk", "price": {price}}}]}}]}}]}}"#
            )
        };
        assert!(Catalog::from_json_str(&with_price("455.25")).is_ok());
        assert!(Catalog::from_json_str(&with_price("0.005")).is_err());
        assert!(Catalog::from_json_str(&with_price("\"5000000000.00\"")).is_err());
    }

    #[test]
    fn test_rejects_unknown_category() {
        let json = r#"{"rooms": [{"roomType": "patio", "categories": [{"id": "hammocks", "name": "Hammocks"}]}]}"#;
        assert!(Catalog::from_json_str(json).is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        let dup_item = Catalog::new(vec![RoomCatalog {
            room_type: RoomType::Office,
            categories: vec![Category {
                id: CategoryId::Desks,
                name: "Desks".to_string(),
                items: vec![item(1, "Desk", "10"), item(1, "Other Desk", "20")],
            }],
        }]);
        assert!(matches!(dup_item, Err(Error::Catalog(_))));

        let dup_room = Catalog::new(vec![
            RoomCatalog { room_type: RoomType::Office, categories: vec![] },
            RoomCatalog { room_type: RoomType::Office, categories: vec![] },
        ]);
        assert!(matches!(dup_room, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_contains_requires_exact_item() {
        let catalog = sample_catalog();
        let sofas = catalog.category(RoomType::LivingRoom, CategoryId::Sofas).unwrap();
        let mut forged = sofas.items[1].clone();
        assert!(sofas.contains(&forged));
        forged.price = Price::ZERO;
        assert!(!sofas.contains(&forged));
    }

    #[test]
    fn test_ids_round_trip_through_str() {
        for room in RoomType::ALL {
            assert_eq!(room.as_str().parse::<RoomType>().unwrap(), room);
        }
        for category in CategoryId::ALL {
            assert_eq!(category.as_str().parse::<CategoryId>().unwrap(), category);
        }
        assert!("garage".parse::<RoomType>().is_err());
    }
}
