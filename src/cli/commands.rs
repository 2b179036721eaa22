//! CLI commands

use crate::core::RoomType;
use crate::filter::{Brand, Color, Material, Style};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Room-Furnish CLI
#[derive(Parser)]
#[command(name = "room-furnish")]
#[command(about = "Multi-room furniture selection, cart and checkout quotes")]
pub struct Cli {
    /// Shop configuration (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List rooms, categories and item counts of a catalog
    Catalog {
        /// Catalog file (JSON)
        #[arg(short, long)]
        catalog: PathBuf,
    },
    /// Load a furnished room into a fresh session and quote its cart
    Preset {
        /// Catalog file (JSON)
        #[arg(short, long)]
        catalog: PathBuf,
        /// Furnished rooms file (JSON)
        #[arg(short, long)]
        presets: PathBuf,
        /// Furnished room id
        #[arg(short, long)]
        id: u32,
    },
    /// Apply a script of selection actions and print the session as JSON
    Run {
        /// Catalog file (JSON)
        #[arg(short, long)]
        catalog: PathBuf,
        /// Script file (JSON array of actions)
        #[arg(short, long)]
        script: PathBuf,
        /// Furnished rooms file, needed by `preset`, `like` and `dislike` actions
        #[arg(short, long)]
        presets: Option<PathBuf>,
        /// Room being edited: leads the render scene, and its journal events
        /// are printed
        #[arg(short, long)]
        room: Option<RoomType>,
        /// Include the combined 3D render scene
        #[arg(long)]
        render: bool,
    },
    /// Print the active-filter labels for the given criteria
    Filters {
        /// Lower price bound
        #[arg(long)]
        min: Option<u32>,
        /// Upper price bound
        #[arg(long)]
        max: Option<u32>,
        #[arg(long = "style")]
        styles: Vec<Style>,
        #[arg(long = "color")]
        colors: Vec<Color>,
        #[arg(long = "material")]
        materials: Vec<Material>,
        #[arg(long = "brand")]
        brands: Vec<Brand>,
    },
    /// Suggest items for a room's design panel
    Recommend {
        /// Catalog file (JSON)
        #[arg(short, long)]
        catalog: PathBuf,
        /// Room type, e.g. living-room
        #[arg(short, long)]
        room: RoomType,
    },
}
