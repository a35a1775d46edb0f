use log::debug;
use smithing_registry::{RecipeDefinition, RecipeHost, RecipeRegistry};
use smithing_world::item::ItemStack;

use crate::PrepareSmithingEvent;

/// First recipe, in registration order, accepting all three items. Any empty slot means
/// no match.
pub fn find_matching_recipe<'r, H: RecipeHost>(
    registry: &'r RecipeRegistry<H>,
    template: Option<&ItemStack>,
    base: Option<&ItemStack>,
    addition: Option<&ItemStack>,
) -> Option<&'r RecipeDefinition> {
    let (Some(template), Some(base), Some(addition)) = (template, base, addition) else {
        return None;
    };
    registry.recipes().find(|recipe| {
        recipe.template.test(template) && recipe.base.test(base) && recipe.addition.test(addition)
    })
}

/// Builds the item a recipe hands out for `base`.
///
/// The display name of the base always replaces the result's one, but its lore is only
/// taken when the result has none of its own. Enchantments are added on top of the
/// result's own, and the trim replaces the result's if the result can carry one.
#[must_use]
pub fn merge_result(definition: &RecipeDefinition, base: &ItemStack) -> ItemStack {
    let mut result = definition.result.clone();

    if base.has_display_name() {
        result.display_name.clone_from(&base.display_name);
    }

    if !result.has_lore() {
        result.lore.clone_from(&base.lore);
    }

    if definition.copy_enchantments {
        for (enchantment, level) in &base.enchantments {
            result.add_enchantment(enchantment.clone(), *level);
        }
    }

    if definition.copy_trim {
        if let Some(trim) = &base.trim {
            result.set_trim(trim.clone());
        }
    }

    result
}

/// Answers smithing previews from a recipe registry.
pub struct SmithingTable<'r, H> {
    registry: &'r RecipeRegistry<H>,
}

impl<'r, H: RecipeHost> SmithingTable<'r, H> {
    pub const fn new(registry: &'r RecipeRegistry<H>) -> Self {
        Self { registry }
    }

    /// Sets the event result when a recipe matches and returns that recipe. Without a
    /// match the event is left as it was.
    pub fn on_prepare_smithing(
        &self,
        event: &mut PrepareSmithingEvent,
    ) -> Option<&'r RecipeDefinition> {
        let inventory = &event.inventory;
        let recipe = find_matching_recipe(
            self.registry,
            inventory.template(),
            inventory.base(),
            inventory.addition(),
        )?;
        let base = inventory.base()?;

        debug!("Smithing preview matched {}", recipe.key);
        event.result = Some(merge_result(recipe, base));
        Some(recipe)
    }
}
