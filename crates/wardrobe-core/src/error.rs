use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WardrobeError {
    #[error("Invalid color format: '{input}' - expected 6 hex digits with optional '#' prefix")]
    InvalidColorFormat { input: String },

    #[error("Location not found: {name}")]
    LocationNotFound { name: String },

    #[error("Location already exists: {name}")]
    LocationAlreadyExists { name: String },

    #[error("Kind not found: {name}")]
    KindNotFound { name: String },

    #[error("Kind already exists: {name}")]
    KindAlreadyExists { name: String },

    #[error("Item not found: {id}")]
    ItemNotFound { id: u64 },

    #[error("Name is required")]
    NameRequired,

    #[error("No location given and inventory.default_location is not set")]
    NoDefaultLocation,

    #[error("No fields to update")]
    NoFieldsToUpdate,

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Home directory not found")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, WardrobeError>;

impl WardrobeError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidColorFormat { .. } => 2,
            Self::LocationNotFound { .. } | Self::KindNotFound { .. } => 3,
            Self::ItemNotFound { .. } => 4,
            Self::LocationAlreadyExists { .. } | Self::KindAlreadyExists { .. } => 5,
            Self::NoFieldsToUpdate => 6,
            _ => 1,
        }
    }
}
