use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smithing_core::{text::TextComponent, Identifier};

mod catalog;
mod item_categories;
mod item_registry;

pub use catalog::{CatalogError, CatalogFile, ItemCatalog};
pub use item_registry::{ArmorSlot, Item, Material, ITEMS};

/// Decorative armor trim, a (material, pattern) pair such as `minecraft:redstone` on
/// `minecraft:rib`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArmorTrim {
    pub material: Identifier,
    pub pattern: Identifier,
}

impl ArmorTrim {
    #[must_use]
    pub const fn new(material: Identifier, pattern: Identifier) -> Self {
        Self { material, pattern }
    }
}

/// A concrete item with the components smithing cares about.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemStack {
    pub material: Material,
    /// Set when the item comes from the custom item catalog.
    pub catalog_id: Option<String>,
    pub display_name: Option<TextComponent>,
    /// Empty means the item has no lore.
    pub lore: Vec<TextComponent>,
    pub enchantments: IndexMap<Identifier, u32>,
    pub trim: Option<ArmorTrim>,
}

impl ItemStack {
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self {
            material,
            catalog_id: None,
            display_name: None,
            lore: Vec::new(),
            enchantments: IndexMap::new(),
            trim: None,
        }
    }

    #[must_use]
    pub const fn has_display_name(&self) -> bool {
        self.display_name.is_some()
    }

    #[must_use]
    pub fn has_lore(&self) -> bool {
        !self.lore.is_empty()
    }

    /// Adds `enchantment` at exactly `level`, replacing any level already present.
    ///
    /// No level cap or compatibility check is applied.
    pub fn add_enchantment(&mut self, enchantment: Identifier, level: u32) {
        self.enchantments.insert(enchantment, level);
    }

    #[must_use]
    pub fn enchantment_level(&self, enchantment: &Identifier) -> Option<u32> {
        self.enchantments.get(enchantment).copied()
    }

    #[must_use]
    pub fn supports_trim(&self) -> bool {
        self.material.supports_trim()
    }

    /// Returns `false` and leaves the item untouched when it cannot carry a trim.
    pub fn set_trim(&mut self, trim: ArmorTrim) -> bool {
        if !self.supports_trim() {
            return false;
        }
        self.trim = Some(trim);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(name: &str) -> ItemStack {
        ItemStack::new(Material::named(name).unwrap())
    }

    #[test]
    fn enchantments_are_forced() {
        let mut sword = stack("diamond_sword");
        sword.add_enchantment(Identifier::vanilla("sharpness"), 3);
        sword.add_enchantment(Identifier::vanilla("sharpness"), 10);
        assert_eq!(
            sword.enchantment_level(&Identifier::vanilla("sharpness")),
            Some(10)
        );
        assert_eq!(sword.enchantments.len(), 1);
    }

    #[test]
    fn trim_needs_armor() {
        let trim = ArmorTrim::new(Identifier::vanilla("redstone"), Identifier::vanilla("rib"));

        let mut sword = stack("diamond_sword");
        assert!(!sword.set_trim(trim.clone()));
        assert!(sword.trim.is_none());

        let mut chestplate = stack("diamond_chestplate");
        assert!(chestplate.set_trim(trim.clone()));
        assert_eq!(chestplate.trim, Some(trim));
    }

    #[test]
    fn empty_lore_is_no_lore() {
        let mut item = stack("paper");
        assert!(!item.has_lore());
        item.lore.push(TextComponent::text("Ancient"));
        assert!(item.has_lore());
    }
}
