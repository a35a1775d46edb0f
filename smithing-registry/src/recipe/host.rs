use indexmap::IndexMap;
use smithing_core::Identifier;
use smithing_world::item::ItemStack;

use super::IngredientMatcher;

/// A smithing transform recipe the way the crafting system stores it.
#[derive(Clone, Debug, PartialEq)]
pub struct SmithingTransformRecipe {
    pub key: Identifier,
    pub result: ItemStack,
    pub template: IngredientMatcher,
    pub base: IngredientMatcher,
    pub addition: IngredientMatcher,
}

/// The crafting system recipes get registered with.
pub trait RecipeHost {
    /// Returns `false` if a recipe with the same key is already known.
    fn register_recipe(&mut self, recipe: SmithingTransformRecipe) -> bool;

    /// Returns `false` if there was nothing to remove.
    fn deregister_recipe(&mut self, key: &Identifier) -> bool;

    fn is_registered(&self, key: &Identifier) -> bool;
}

/// In-memory recipe store.
#[derive(Debug, Default)]
pub struct RecipeBook {
    recipes: IndexMap<Identifier, SmithingTransformRecipe>,
}

impl RecipeBook {
    #[must_use]
    pub fn get(&self, key: &Identifier) -> Option<&SmithingTransformRecipe> {
        self.recipes.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeHost for RecipeBook {
    fn register_recipe(&mut self, recipe: SmithingTransformRecipe) -> bool {
        if self.recipes.contains_key(&recipe.key) {
            return false;
        }
        self.recipes.insert(recipe.key.clone(), recipe);
        true
    }

    fn deregister_recipe(&mut self, key: &Identifier) -> bool {
        self.recipes.shift_remove(key).is_some()
    }

    fn is_registered(&self, key: &Identifier) -> bool {
        self.recipes.contains_key(key)
    }
}
