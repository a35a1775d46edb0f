use std::{collections::HashMap, fmt, hash::Hash, sync::LazyLock};

use serde::Deserialize;

const ITEMS_JSON: &str = include_str!("../../../assets/items.json");

pub static ITEMS: LazyLock<HashMap<String, Item>> = LazyLock::new(|| {
    serde_json::from_str(ITEMS_JSON).expect("Could not parse items.json registry.")
});

#[derive(Deserialize, Clone, Debug)]
pub struct Item {
    pub armor: Option<ArmorSlot>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArmorSlot {
    Head,
    Chest,
    Legs,
    Feet,
}

/// A vanilla item kind, backed by an entry of [`ITEMS`].
#[derive(Clone, Copy)]
pub struct Material {
    name: &'static str,
    item: &'static Item,
}

impl Material {
    /// Exact lookup by registry name, e.g. `diamond_sword`.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        ITEMS
            .get_key_value(name)
            .map(|(name, item)| Self {
                name: name.as_str(),
                item,
            })
    }

    /// Lenient lookup the way operators type item names.
    ///
    /// `Diamond Sword`, `DIAMOND_SWORD` and `minecraft:diamond_sword` all resolve to the
    /// same material. Runs of whitespace count as one `_`.
    #[must_use]
    pub fn match_material(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = match name.split_once(':') {
            Some((namespace, path)) if namespace.eq_ignore_ascii_case("minecraft") => path,
            Some(_) => return None,
            None => name,
        };
        let normalized = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_ascii_lowercase();
        Self::named(&normalized)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn armor_slot(&self) -> Option<ArmorSlot> {
        self.item.armor
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Material {}

impl Hash for Material {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Material({})", self.name)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minecraft:{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_material_is_lenient() {
        let sword = Material::named("diamond_sword").unwrap();
        for input in [
            "diamond_sword",
            "DIAMOND_SWORD",
            "Diamond Sword",
            "Diamond  Sword",
            "diamond\tsword",
            "  minecraft:diamond_sword ",
            "MINECRAFT:DIAMOND_SWORD",
        ] {
            assert_eq!(Material::match_material(input), Some(sword), "{input}");
        }
    }

    #[test]
    fn unknown_names_do_not_match() {
        assert!(Material::match_material("diamond_spoon").is_none());
        assert!(Material::match_material("nexo:diamond_sword").is_none());
        assert!(Material::match_material("").is_none());
    }

    #[test]
    fn registry_data_is_loaded() {
        let boots = Material::named("netherite_boots").unwrap();
        assert_eq!(boots.armor_slot(), Some(ArmorSlot::Feet));
        assert_eq!(boots.to_string(), "minecraft:netherite_boots");
        assert_eq!(Material::named("redstone").unwrap().armor_slot(), None);
    }
}
