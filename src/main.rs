//! Room-Furnish: Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use room_furnish::checkout::CheckoutQuote;
use room_furnish::cli::report::{CartSummary, CatalogSummary, RecommendationList, RoomTabs};
use room_furnish::cli::script::{run_script, ScriptAction};
use room_furnish::cli::{Cli, Commands};
use room_furnish::config::ShopConfig;
use room_furnish::core::{Catalog, FurnishedRoom, RoomType};
use room_furnish::filter::FilterCriteria;
use room_furnish::ratings::RoomRatings;
use room_furnish::recommend::recommend;
use room_furnish::render::RenderScope;
use room_furnish::storage::SelectionJournal;
use room_furnish::store::SelectionStore;
use std::path::Path;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ShopConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ShopConfig::default(),
    };

    match cli.command {
        Commands::Catalog { catalog } => {
            let catalog = load_catalog(&catalog)?;
            print!("{}", CatalogSummary(&catalog));
            Ok(())
        }
        Commands::Preset { catalog, presets, id } => {
            let catalog = load_catalog(&catalog)?;
            let presets = load_presets(&presets)?;
            let preset = FurnishedRoom::find(&presets, id)?;

            let mut store = SelectionStore::new(catalog);
            let report = store.load_furnished_room(preset);
            println!(
                "{} ({}): {} added, {} skipped",
                preset.name,
                preset.style,
                report.added.len(),
                report.skipped.len()
            );

            let quote = CheckoutQuote::from_cart(store.cart(), &config.checkout);
            print!(
                "{}",
                RoomTabs {
                    catalog: store.catalog(),
                    cart: store.cart(),
                }
            );
            print!(
                "{}",
                CartSummary {
                    cart: store.cart(),
                    quote: &quote,
                }
            );
            Ok(())
        }
        Commands::Run {
            catalog,
            script,
            presets,
            room,
            render,
        } => {
            let catalog = load_catalog(&catalog)?;
            let presets = match presets {
                Some(path) => load_presets(&path)?,
                None => Vec::new(),
            };
            let actions = ScriptAction::load_all(&script)
                .with_context(|| format!("failed to load script {}", script.display()))?;

            let mut store = SelectionStore::new(catalog);
            let mut ratings = RoomRatings::new();
            let steps = run_script(&mut store, &mut ratings, &actions, &presets);
            let quote = CheckoutQuote::from_cart(store.cart(), &config.checkout);

            let mut output = serde_json::json!({
                "steps": steps,
                "cart": store.list_entries(),
                "quote": quote,
                "ratings": ratings,
            });
            if let Some(room) = room {
                output["roomEvents"] = serde_json::to_value(store.journal().room_events(room))?;
            }
            if render {
                let active = room
                    .or_else(|| store.catalog().room_types().next())
                    .unwrap_or(RoomType::LivingRoom);
                output["scene"] = serde_json::to_value(store.render_scene(RenderScope::AllRooms { active }))?;
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Commands::Filters {
            min,
            max,
            styles,
            colors,
            materials,
            brands,
        } => {
            let evaluator = config.filter_evaluator();
            let bounds = evaluator.bounds();
            let mut criteria = evaluator
                .reset()
                .with_price_range(min.unwrap_or(bounds.min), max.unwrap_or(bounds.max));
            for style in styles {
                criteria = criteria.with_style(style);
            }
            for color in colors {
                criteria = criteria.with_color(color);
            }
            for material in materials {
                criteria = criteria.with_material(material);
            }
            for brand in brands {
                criteria = criteria.with_brand(brand);
            }
            print_labels(&evaluator.apply(&criteria), &criteria);
            Ok(())
        }
        Commands::Recommend { catalog, room } => {
            let store = SelectionStore::new(load_catalog(&catalog)?);
            let recommendations = recommend(&store, room, config.recommendations_per_category);
            print!("{}", RecommendationList(&recommendations));
            Ok(())
        }
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::load(path).with_context(|| format!("failed to load catalog {}", path.display()))
}

fn load_presets(path: &Path) -> Result<Vec<FurnishedRoom>> {
    FurnishedRoom::load_all(path).with_context(|| format!("failed to load furnished rooms {}", path.display()))
}

fn print_labels(labels: &[String], criteria: &FilterCriteria) {
    if labels.is_empty() {
        println!("No active filters ({})", criteria.price_range);
    }
    for label in labels {
        println!("{label}");
    }
}
