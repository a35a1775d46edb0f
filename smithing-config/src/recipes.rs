use std::{fs, path::Path};

use indexmap::IndexMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

use crate::ConfigError;

/// Written when no recipe file exists yet, so operators have something to start from.
pub const DEFAULT_RECIPES: &str = r#"# Smithing transform recipes.
#
# Every table is one recipe, its name becomes the recipe key. Recipes are matched in
# the order they appear in this file.
#
# An item is either a custom catalog item (`nexo_item`) or a vanilla item
# (`minecraft_item`). If both are given the catalog item wins.
#
# [relic_blade]
# result = { nexo_item = "relic_blade" }
# template = { minecraft_item = "netherite_upgrade_smithing_template" }
# base = { minecraft_item = "diamond_sword" }
# addition = { nexo_item = "relic_shard" }
# copy_trim = true
# copy_enchantments = true
"#;

/// Where an item comes from: the custom item catalog or the vanilla item table.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemReferenceConfig {
    pub nexo_item: Option<String>,
    pub minecraft_item: Option<String>,
}

#[serde_inline_default]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipeEntry {
    pub result: Option<ItemReferenceConfig>,
    pub template: Option<ItemReferenceConfig>,
    pub base: Option<ItemReferenceConfig>,
    pub addition: Option<ItemReferenceConfig>,
    /// Carry the armor trim of the base item over to the result.
    #[serde_inline_default(true)]
    pub copy_trim: bool,
    /// Carry the enchantments of the base item over to the result.
    #[serde_inline_default(true)]
    pub copy_enchantments: bool,
}

/// The raw recipe file.
///
/// Entries are kept as untyped values until someone asks for them, a broken entry only
/// breaks itself and not the whole file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipesConfig {
    entries: IndexMap<String, toml::Value>,
}

impl RecipesConfig {
    /// Reads the recipe file at `path`, creating it with [`DEFAULT_RECIPES`] if it is missing.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No recipe file at {path:?}, writing an example one");
            if let Err(err) = fs::write(path, DEFAULT_RECIPES) {
                warn!("Couldn't write default recipes to {path:?}. Reason: {err}");
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        Ok(Self {
            entries: toml::from_str(content)?,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry in file order, typed one by one.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Result<RecipeEntry, toml::de::Error>)> {
        self.entries
            .iter()
            .map(|(id, value)| (id.as_str(), value.clone().try_into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_has_no_recipes() {
        let config = RecipesConfig::parse(DEFAULT_RECIPES).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn keeps_file_order() {
        let config = RecipesConfig::parse(
            r#"
            [zeta]
            result = { minecraft_item = "netherite_sword" }
            [alpha]
            result = { minecraft_item = "netherite_axe" }
            [mid]
            result = { minecraft_item = "netherite_hoe" }
            "#,
        )
        .unwrap();
        let ids: Vec<&str> = config.entries().map(|(id, _)| id).collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn flags_default_to_true() {
        let config = RecipesConfig::parse(
            r#"
            [relic]
            result = { nexo_item = "relic_blade" }
            template = { minecraft_item = "netherite_upgrade_smithing_template" }
            base = { minecraft_item = "diamond_sword" }
            addition = { nexo_item = "relic_shard" }
            copy_trim = false
            "#,
        )
        .unwrap();
        let (_, entry) = config.entries().next().unwrap();
        let entry = entry.unwrap();
        assert!(!entry.copy_trim);
        assert!(entry.copy_enchantments);
        assert_eq!(entry.result.unwrap().nexo_item.as_deref(), Some("relic_blade"));
        assert_eq!(
            entry.base.unwrap().minecraft_item.as_deref(),
            Some("diamond_sword")
        );
    }

    #[test]
    fn broken_entry_does_not_poison_siblings() {
        let config = RecipesConfig::parse(
            r#"
            [broken]
            copy_trim = "yes"
            [fine]
            result = { minecraft_item = "netherite_sword" }
            "#,
        )
        .unwrap();
        let entries: Vec<_> = config.entries().collect();
        assert!(entries[0].1.is_err());
        let fine = entries[1].1.as_ref().unwrap();
        assert!(fine.base.is_none());
    }
}
