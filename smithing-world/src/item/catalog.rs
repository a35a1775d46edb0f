use std::{fs, io, path::Path, path::PathBuf};

use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;
use smithing_core::{text::TextComponent, Identifier};
use thiserror::Error;

use super::{ArmorTrim, ItemStack, Material};

/// Source of custom items, looked up by their catalog id.
pub trait ItemCatalog {
    /// A fresh copy of the item template, or `None` if the catalog has no such id.
    fn lookup(&self, id: &str) -> Option<ItemStack>;
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Couldn't read item catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Couldn't parse item catalog {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Deserialize)]
struct CatalogEntry {
    material: String,
    display_name: Option<TextComponent>,
    #[serde(default)]
    lore: Vec<TextComponent>,
    #[serde(default)]
    enchantments: IndexMap<Identifier, u32>,
    trim: Option<ArmorTrim>,
}

/// Custom items declared in a toml file, one table per item id.
///
/// ```toml
/// [relic_blade]
/// material = "netherite_sword"
/// display_name = { text = "Relic Blade", color = "gold" }
/// lore = ["Forged from a forgotten age"]
/// enchantments = { "minecraft:sharpness" = 5 }
/// ```
#[derive(Debug, Default, Clone)]
pub struct CatalogFile {
    items: IndexMap<String, ItemStack>,
}

impl CatalogFile {
    /// A missing file is an empty catalog.
    pub fn read(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            warn!("No item catalog at {path:?}, catalog items will not resolve");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Entries that cannot be turned into an item are skipped with a warning.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let raw: IndexMap<String, toml::Value> = toml::from_str(content)?;
        let mut items = IndexMap::with_capacity(raw.len());

        for (id, value) in raw {
            let entry: CatalogEntry = match value.try_into() {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping catalog item {id}: {err}");
                    continue;
                }
            };
            let Some(material) = Material::match_material(&entry.material) else {
                warn!("Skipping catalog item {id}: unknown material '{}'", entry.material);
                continue;
            };

            let mut item = ItemStack::new(material);
            item.catalog_id = Some(id.clone());
            item.display_name = entry.display_name;
            item.lore = entry.lore;
            item.enchantments = entry.enchantments;
            if let Some(trim) = entry.trim {
                if !item.set_trim(trim) {
                    warn!("Catalog item {id}: {material} cannot carry a trim, ignoring it");
                }
            }
            items.insert(id, item);
        }

        Ok(Self { items })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}

impl ItemCatalog for CatalogFile {
    fn lookup(&self, id: &str) -> Option<ItemStack> {
        self.items.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        [relic_blade]
        material = "netherite_sword"
        display_name = { text = "Relic Blade", color = "gold" }
        lore = ["Forged from a forgotten age"]
        enchantments = { "minecraft:sharpness" = 5, unbreaking = 3 }

        [relic_shard]
        material = "echo_shard"

        [warden_plate]
        material = "NETHERITE_CHESTPLATE"
        trim = { material = "minecraft:redstone", pattern = "minecraft:ward" }

        [spoon]
        material = "diamond_spoon"

        [trimmed_sword]
        material = "iron_sword"
        trim = { material = "minecraft:gold", pattern = "minecraft:rib" }
    "#;

    #[test]
    fn builds_items_with_components() {
        let catalog = CatalogFile::parse(CATALOG).unwrap();
        let blade = catalog.lookup("relic_blade").unwrap();
        assert_eq!(blade.catalog_id.as_deref(), Some("relic_blade"));
        assert_eq!(blade.material, Material::named("netherite_sword").unwrap());
        assert_eq!(blade.display_name.as_ref().unwrap().text, "Relic Blade");
        assert_eq!(blade.lore.len(), 1);
        assert_eq!(
            blade.enchantment_level(&Identifier::vanilla("sharpness")),
            Some(5)
        );
        assert_eq!(
            blade.enchantment_level(&Identifier::vanilla("unbreaking")),
            Some(3)
        );

        let plate = catalog.lookup("warden_plate").unwrap();
        assert_eq!(plate.trim.unwrap().pattern, Identifier::vanilla("ward"));
    }

    #[test]
    fn bad_entries_are_skipped() {
        let catalog = CatalogFile::parse(CATALOG).unwrap();
        assert!(catalog.lookup("spoon").is_none());
        assert_eq!(
            catalog.ids().collect::<Vec<_>>(),
            ["relic_blade", "relic_shard", "warden_plate", "trimmed_sword"]
        );
        // swords cannot carry a trim, the item itself still loads
        assert!(catalog.lookup("trimmed_sword").unwrap().trim.is_none());
    }

    #[test]
    fn malformed_colour_skips_only_its_entry() {
        let catalog = CatalogFile::parse(
            r##"
            [relic_blade]
            material = "netherite_sword"
            display_name = { text = "Relic Blade", color = "#aébcd" }

            [relic_shard]
            material = "echo_shard"
            display_name = { text = "Relic Shard", color = "#55ffff" }
            "##,
        )
        .unwrap();
        assert!(catalog.lookup("relic_blade").is_none());
        assert_eq!(catalog.ids().collect::<Vec<_>>(), ["relic_shard"]);
    }

    #[test]
    fn lookup_returns_independent_copies() {
        let catalog = CatalogFile::parse(CATALOG).unwrap();
        let mut first = catalog.lookup("relic_shard").unwrap();
        first.lore.push(TextComponent::text("changed"));
        assert!(!catalog.lookup("relic_shard").unwrap().has_lore());
    }
}
