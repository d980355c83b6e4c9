use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "wardrobe")]
#[command(about = "Clothing inventory tracker with perceptual color classification")]
#[command(version)]
pub struct Cli {
    /// Base directory (default: ~/.wardrobe)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage storage locations
    Location {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// Manage garment kinds (shirt, jeans, ...)
    Kind {
        #[command(subcommand)]
        action: KindAction,
    },

    /// Manage clothing items
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum LocationAction {
    /// Add a storage location
    Add {
        /// Location name (e.g., "Bedroom closet")
        name: String,
    },

    /// List all locations
    List,
}

#[derive(Subcommand)]
pub enum KindAction {
    /// Add a garment kind
    Add {
        /// Kind name (e.g., "Shirt")
        name: String,
    },

    /// List all kinds
    List,
}

#[derive(Subcommand)]
pub enum ItemAction {
    /// Add a clothing item
    Add {
        /// Item name
        name: String,

        /// Garment kind (must exist)
        #[arg(short, long)]
        kind: String,

        /// Color as picked, 6 hex digits with optional '#'
        #[arg(short, long)]
        color: String,

        /// Human-readable color name (default: the classified category)
        #[arg(long)]
        color_name: Option<String>,

        /// Storage location (default: inventory.default_location from config)
        #[arg(short, long)]
        location: Option<String>,

        /// Last worn date, YYYY-MM-DD (default: today)
        #[arg(long)]
        last_used: Option<NaiveDate>,

        /// Path to a photo of the item
        #[arg(long)]
        image: Option<String>,
    },

    /// List items with kind and location names
    List {
        /// Only items in this location
        #[arg(short, long)]
        location: Option<String>,

        /// Only items classified into this color category (e.g., Red)
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields of an item
    Update {
        /// Item id
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New garment kind
        #[arg(long)]
        kind: Option<String>,

        /// New color (re-classifies the category)
        #[arg(long)]
        color: Option<String>,

        /// New storage location
        #[arg(long)]
        location: Option<String>,

        /// New last worn date, YYYY-MM-DD
        #[arg(long)]
        last_used: Option<NaiveDate>,

        /// New photo path
        #[arg(long)]
        image: Option<String>,
    },

    /// Move an item to another location
    Move {
        /// Item id
        id: u64,

        /// Destination location
        location: String,
    },

    /// Remove an item
    Remove {
        /// Item id
        id: u64,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., inventory.default_location)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., inventory.default_location)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
