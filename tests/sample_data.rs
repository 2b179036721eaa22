//! The bundled data files load and agree with each other

use room_furnish::checkout::CheckoutQuote;
use room_furnish::cli::script::{run_script, ScriptAction, StepOutcome};
use room_furnish::config::ShopConfig;
use room_furnish::core::{Catalog, FurnishedRoom, RoomType};
use room_furnish::ratings::{Rating, RoomRatings};
use room_furnish::store::SelectionStore;
use std::path::PathBuf;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn test_catalog_covers_every_room() {
    let catalog = Catalog::load(data("catalog.json")).unwrap();
    let rooms: Vec<RoomType> = catalog.room_types().collect();
    assert_eq!(rooms, RoomType::ALL.to_vec());
}

#[test]
fn test_every_furnished_room_resolves() {
    let catalog = Catalog::load(data("catalog.json")).unwrap();
    let presets = FurnishedRoom::load_all(data("furnished_rooms.json")).unwrap();
    assert_eq!(presets.len(), 9);

    let mut store = SelectionStore::new(catalog);
    for preset in &presets {
        let report = store.load_furnished_room(preset);
        assert!(report.skipped.is_empty(), "{} has unresolved furniture", preset.name);
        assert_eq!(report.added.len(), preset.furniture.len());
    }
}

#[test]
fn test_sample_script() {
    let catalog = Catalog::load(data("catalog.json")).unwrap();
    let presets = FurnishedRoom::load_all(data("furnished_rooms.json")).unwrap();
    let actions = ScriptAction::load_all(data("script.json")).unwrap();
    let config = ShopConfig::load(data("shop.json")).unwrap();

    let mut store = SelectionStore::new(catalog);
    let mut ratings = RoomRatings::new();
    let steps = run_script(&mut store, &mut ratings, &actions, &presets);
    assert!(matches!(steps.last().unwrap().outcome, StepOutcome::Skipped { .. }));
    assert_eq!(ratings.rating(1), Rating::Liked);
    assert_eq!(ratings.rating(9), Rating::Disliked);

    // Sofa 540.00, one chair 89.99, bedroom preset 1357.00, desk 279.00
    assert_eq!(store.chosen_count(), 6);
    assert_eq!(store.total().to_string(), "2265.99");

    let quote = CheckoutQuote::from_cart(store.cart(), &config.checkout);
    assert!(quote.free_shipping);
    assert_eq!(quote.tax.to_string(), "181.28");
    assert_eq!(quote.grand_total.to_string(), "2447.27");
}
