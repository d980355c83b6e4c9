pub mod color;
pub mod config;
pub mod error;
pub mod inventory;

pub use color::{classify, ColorCategory, ALL_CATEGORIES};
pub use config::Config;
pub use error::{Result, WardrobeError};
pub use inventory::{
    Inventory, InventoryStore, Item, ItemDraft, ItemPatch, ItemView, Kind, Location,
};
