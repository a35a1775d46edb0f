use crate::item::{ArmorSlot, Material};

impl Material {
    pub fn is_helmet(&self) -> bool {
        self.armor_slot() == Some(ArmorSlot::Head)
    }

    pub fn is_chestplate(&self) -> bool {
        self.armor_slot() == Some(ArmorSlot::Chest)
    }

    pub fn is_leggings(&self) -> bool {
        self.armor_slot() == Some(ArmorSlot::Legs)
    }

    pub fn is_boots(&self) -> bool {
        self.armor_slot() == Some(ArmorSlot::Feet)
    }

    /// Only armor pieces can carry an armor trim. Elytra are not armor.
    pub fn supports_trim(&self) -> bool {
        self.is_helmet() || self.is_chestplate() || self.is_leggings() || self.is_boots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_supports_trim() {
        for name in [
            "turtle_helmet",
            "leather_chestplate",
            "chainmail_leggings",
            "netherite_boots",
        ] {
            assert!(Material::named(name).unwrap().supports_trim(), "{name}");
        }
    }

    #[test]
    fn everything_else_does_not() {
        for name in ["elytra", "netherite_sword", "shield", "netherite_ingot"] {
            assert!(!Material::named(name).unwrap().supports_trim(), "{name}");
        }
    }
}
