use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::color::{classify, ColorCategory};
use crate::error::{Result, WardrobeError};

const INVENTORY_FILE: &str = "inventory.toml";

/// A place where garments are kept ("Bedroom closet", "Attic box 3", ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub name: String,
}

/// A garment type ("Shirt", "Jeans", ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kind {
    pub id: u64,
    pub name: String,
}

/// A single garment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub kind_id: u64,
    /// Color exactly as picked, hex string
    pub color: String,
    /// Human-readable color name, sourced by the caller
    pub color_name: String,
    /// Base color category derived from `color` at record creation
    pub category: ColorCategory,
    pub location_id: u64,
    pub last_used: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Input for a new item. Kind and location are referenced by name.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub name: String,
    pub kind: String,
    pub color: String,
    /// Defaults to the classified category label when absent
    pub color_name: Option<String>,
    pub location: String,
    /// Defaults to today
    pub last_used: Option<NaiveDate>,
    pub image: Option<String>,
}

/// Partial update for an existing item. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub color: Option<String>,
    pub location: Option<String>,
    pub last_used: Option<NaiveDate>,
    pub image: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.color.is_none()
            && self.location.is_none()
            && self.last_used.is_none()
            && self.image.is_none()
    }
}

/// An item joined with its kind and location names, for listings
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub id: u64,
    pub name: String,
    pub kind: String,
    pub color: String,
    pub color_name: String,
    pub category: ColorCategory,
    pub location: String,
    pub last_used: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The persisted inventory document
#[derive(Debug, Serialize, Deserialize)]
pub struct Inventory {
    pub updated_at: DateTime<Utc>,
    next_location_id: u64,
    next_kind_id: u64,
    next_item_id: u64,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub kinds: Vec<Kind>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            updated_at: Utc::now(),
            next_location_id: 1,
            next_kind_id: 1,
            next_item_id: 1,
            locations: Vec::new(),
            kinds: Vec::new(),
            items: Vec::new(),
        }
    }
}

/// File-backed inventory store under the base directory
pub struct InventoryStore {
    path: PathBuf,
    inventory: Inventory,
}

impl InventoryStore {
    /// Load the inventory from base directory, or start empty
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(INVENTORY_FILE);
        let inventory = if path.exists() {
            toml::from_str(&fs::read_to_string(&path)?)?
        } else {
            Inventory::default()
        };

        Ok(Self { path, inventory })
    }

    /// Write the inventory back to disk
    pub fn save(&mut self) -> Result<()> {
        self.inventory.updated_at = Utc::now();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.inventory)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn locations(&self) -> &[Location] {
        &self.inventory.locations
    }

    pub fn kinds(&self) -> &[Kind] {
        &self.inventory.kinds
    }

    pub fn items(&self) -> &[Item] {
        &self.inventory.items
    }

    pub fn add_location(&mut self, name: &str) -> Result<Location> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WardrobeError::NameRequired);
        }
        if self.inventory.locations.iter().any(|l| l.name == name) {
            return Err(WardrobeError::LocationAlreadyExists {
                name: name.to_string(),
            });
        }

        let location = Location {
            id: self.inventory.next_location_id,
            name: name.to_string(),
        };
        self.inventory.next_location_id += 1;
        self.inventory.locations.push(location.clone());
        Ok(location)
    }

    pub fn add_kind(&mut self, name: &str) -> Result<Kind> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WardrobeError::NameRequired);
        }
        if self.inventory.kinds.iter().any(|k| k.name == name) {
            return Err(WardrobeError::KindAlreadyExists {
                name: name.to_string(),
            });
        }

        let kind = Kind {
            id: self.inventory.next_kind_id,
            name: name.to_string(),
        };
        self.inventory.next_kind_id += 1;
        self.inventory.kinds.push(kind.clone());
        Ok(kind)
    }

    pub fn location_id(&self, name: &str) -> Result<u64> {
        self.inventory
            .locations
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.id)
            .ok_or_else(|| WardrobeError::LocationNotFound {
                name: name.to_string(),
            })
    }

    pub fn kind_id(&self, name: &str) -> Result<u64> {
        self.inventory
            .kinds
            .iter()
            .find(|k| k.name == name)
            .map(|k| k.id)
            .ok_or_else(|| WardrobeError::KindNotFound {
                name: name.to_string(),
            })
    }

    /// Create a new item record. The color is classified immediately before
    /// the record is stored.
    pub fn add_item(&mut self, draft: ItemDraft) -> Result<Item> {
        if draft.name.trim().is_empty() {
            return Err(WardrobeError::NameRequired);
        }
        let kind_id = self.kind_id(&draft.kind)?;
        let location_id = self.location_id(&draft.location)?;
        let category = classify(&draft.color)?;

        let item = Item {
            id: self.inventory.next_item_id,
            name: draft.name.trim().to_string(),
            kind_id,
            color: draft.color,
            color_name: draft
                .color_name
                .unwrap_or_else(|| category.as_str().to_string()),
            category,
            location_id,
            last_used: draft.last_used.unwrap_or_else(|| Utc::now().date_naive()),
            image: draft.image,
        };
        self.inventory.next_item_id += 1;
        self.inventory.items.push(item.clone());
        Ok(item)
    }

    /// All items joined with kind and location names
    pub fn item_views(&self) -> Vec<ItemView> {
        self.inventory
            .items
            .iter()
            .map(|item| self.view_of(item))
            .collect()
    }

    /// Items stored in the named location
    pub fn items_in_location(&self, location: &str) -> Result<Vec<ItemView>> {
        let location_id = self.location_id(location)?;
        Ok(self
            .inventory
            .items
            .iter()
            .filter(|item| item.location_id == location_id)
            .map(|item| self.view_of(item))
            .collect())
    }

    /// Apply a partial update. A color change re-classifies the category;
    /// the stored color name stays as sourced at creation.
    pub fn update_item(&mut self, id: u64, patch: ItemPatch) -> Result<Item> {
        if patch.is_empty() {
            return Err(WardrobeError::NoFieldsToUpdate);
        }

        let kind_id = patch.kind.as_deref().map(|k| self.kind_id(k)).transpose()?;
        let location_id = patch
            .location
            .as_deref()
            .map(|l| self.location_id(l))
            .transpose()?;
        let recolored = patch
            .color
            .map(|c| classify(&c).map(|category| (c, category)))
            .transpose()?;

        let item = self
            .inventory
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(WardrobeError::ItemNotFound { id })?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(kind_id) = kind_id {
            item.kind_id = kind_id;
        }
        if let Some((color, category)) = recolored {
            item.color = color;
            item.category = category;
        }
        if let Some(location_id) = location_id {
            item.location_id = location_id;
        }
        if let Some(last_used) = patch.last_used {
            item.last_used = last_used;
        }
        if let Some(image) = patch.image {
            item.image = Some(image);
        }

        Ok(item.clone())
    }

    pub fn remove_item(&mut self, id: u64) -> Result<Item> {
        let index = self
            .inventory
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(WardrobeError::ItemNotFound { id })?;
        Ok(self.inventory.items.remove(index))
    }

    fn view_of(&self, item: &Item) -> ItemView {
        let kind = self
            .inventory
            .kinds
            .iter()
            .find(|k| k.id == item.kind_id)
            .map_or(String::new(), |k| k.name.clone());
        let location = self
            .inventory
            .locations
            .iter()
            .find(|l| l.id == item.location_id)
            .map_or(String::new(), |l| l.name.clone());

        ItemView {
            id: item.id,
            name: item.name.clone(),
            kind,
            color: item.color.clone(),
            color_name: item.color_name.clone(),
            category: item.category,
            location,
            last_used: item.last_used,
            image: item.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_basics(dir: &TempDir) -> InventoryStore {
        let mut store = InventoryStore::load(dir.path()).unwrap();
        store.add_location("Bedroom closet").unwrap();
        store.add_kind("Shirt").unwrap();
        store
    }

    fn draft(name: &str, color: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            kind: "Shirt".to_string(),
            color: color.to_string(),
            color_name: None,
            location: "Bedroom closet".to_string(),
            last_used: None,
            image: None,
        }
    }

    #[test]
    fn test_add_location_assigns_increasing_ids() {
        let dir = TempDir::new().unwrap();
        let mut store = InventoryStore::load(dir.path()).unwrap();
        let a = store.add_location("A").unwrap();
        let b = store.add_location("B").unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.locations().len(), 2);
    }

    #[test]
    fn test_add_location_rejects_duplicate_and_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = InventoryStore::load(dir.path()).unwrap();
        store.add_location("A").unwrap();
        assert!(matches!(
            store.add_location("A"),
            Err(WardrobeError::LocationAlreadyExists { .. })
        ));
        assert!(matches!(
            store.add_location("  "),
            Err(WardrobeError::NameRequired)
        ));
    }

    #[test]
    fn test_add_item_classifies_color() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_basics(&dir);

        let item = store.add_item(draft("Crimson tee", "#DC143C")).unwrap();
        assert_eq!(item.category, ColorCategory::Red);
        // no color name supplied, category label used as fallback
        assert_eq!(item.color_name, "Red");
        assert_eq!(item.color, "#DC143C");
        assert_eq!(item.last_used, Utc::now().date_naive());
    }

    #[test]
    fn test_add_item_keeps_supplied_color_name() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_basics(&dir);

        let mut d = draft("Navy polo", "#191970");
        d.color_name = Some("Midnight Blue".to_string());
        let item = store.add_item(d).unwrap();
        assert_eq!(item.category, ColorCategory::Blue);
        assert_eq!(item.color_name, "Midnight Blue");
    }

    #[test]
    fn test_add_item_rejects_bad_inputs() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_basics(&dir);

        let mut unknown_location = draft("Tee", "#FF0000");
        unknown_location.location = "Garage".to_string();
        assert!(matches!(
            store.add_item(unknown_location),
            Err(WardrobeError::LocationNotFound { .. })
        ));

        let mut unknown_kind = draft("Tee", "#FF0000");
        unknown_kind.kind = "Hat".to_string();
        assert!(matches!(
            store.add_item(unknown_kind),
            Err(WardrobeError::KindNotFound { .. })
        ));

        assert!(matches!(
            store.add_item(draft("Tee", "#12345")),
            Err(WardrobeError::InvalidColorFormat { .. })
        ));

        assert!(store.items().is_empty());
    }

    #[test]
    fn test_item_views_join_names() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_basics(&dir);
        store.add_item(draft("Tee", "#FF0000")).unwrap();

        let views = store.item_views();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].kind, "Shirt");
        assert_eq!(views[0].location, "Bedroom closet");
        assert_eq!(views[0].category, ColorCategory::Red);
    }

    #[test]
    fn test_items_in_location() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_basics(&dir);
        store.add_location("Attic").unwrap();
        store.add_item(draft("Tee", "#FF0000")).unwrap();
        let mut in_attic = draft("Scarf", "#FFFFFF");
        in_attic.location = "Attic".to_string();
        store.add_item(in_attic).unwrap();

        let views = store.items_in_location("Attic").unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, "Scarf");
        assert!(store.items_in_location("Garage").is_err());
    }

    #[test]
    fn test_update_item_partial() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_basics(&dir);
        store.add_location("Attic").unwrap();
        let item = store.add_item(draft("Tee", "#FF0000")).unwrap();

        let updated = store
            .update_item(
                item.id,
                ItemPatch {
                    name: Some("Old tee".to_string()),
                    location: Some("Attic".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Old tee");
        assert_eq!(updated.location_id, store.location_id("Attic").unwrap());
        // untouched fields stay
        assert_eq!(updated.color, "#FF0000");
        assert_eq!(updated.category, ColorCategory::Red);
    }

    #[test]
    fn test_update_item_color_reclassifies() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_basics(&dir);
        let mut d = draft("Tee", "#FF0000");
        d.color_name = Some("Ferrari Red".to_string());
        let item = store.add_item(d).unwrap();

        let updated = store
            .update_item(
                item.id,
                ItemPatch {
                    color: Some("#0000FF".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.category, ColorCategory::Blue);
        // the sourced color name is not recomputed
        assert_eq!(updated.color_name, "Ferrari Red");
    }

    #[test]
    fn test_update_item_errors() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_basics(&dir);
        let item = store.add_item(draft("Tee", "#FF0000")).unwrap();

        assert!(matches!(
            store.update_item(item.id, ItemPatch::default()),
            Err(WardrobeError::NoFieldsToUpdate)
        ));
        assert!(matches!(
            store.update_item(
                999,
                ItemPatch {
                    name: Some("x".to_string()),
                    ..Default::default()
                }
            ),
            Err(WardrobeError::ItemNotFound { id: 999 })
        ));

        // a failed color update must not change the record
        assert!(store
            .update_item(
                item.id,
                ItemPatch {
                    color: Some("nope".to_string()),
                    ..Default::default()
                }
            )
            .is_err());
        assert_eq!(store.items()[0].color, "#FF0000");
    }

    #[test]
    fn test_remove_item() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_basics(&dir);
        let item = store.add_item(draft("Tee", "#FF0000")).unwrap();

        let removed = store.remove_item(item.id).unwrap();
        assert_eq!(removed.id, item.id);
        assert!(store.items().is_empty());
        assert!(matches!(
            store.remove_item(item.id),
            Err(WardrobeError::ItemNotFound { .. })
        ));
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with_basics(&dir);
        let first = store.add_item(draft("Tee", "#FF0000")).unwrap();
        store.remove_item(first.id).unwrap();
        let second = store.add_item(draft("Other tee", "#00FF00")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = store_with_basics(&dir);
            let mut d = draft("Tee", "#DC143C");
            d.image = Some("photos/tee.jpg".to_string());
            store.add_item(d).unwrap();
            store.save().unwrap();
        }

        let store = InventoryStore::load(dir.path()).unwrap();
        assert_eq!(store.locations().len(), 1);
        assert_eq!(store.kinds().len(), 1);
        assert_eq!(store.items().len(), 1);
        let item = &store.items()[0];
        assert_eq!(item.name, "Tee");
        assert_eq!(item.category, ColorCategory::Red);
        assert_eq!(item.image.as_deref(), Some("photos/tee.jpg"));
    }
}
