use smithing_config::RecipeEntry;
use smithing_core::Identifier;
use smithing_world::item::ItemStack;

use super::{IngredientMatcher, ItemReference, ItemResolver, SmithingTransformRecipe};
use crate::error::RecipeError;

/// One validated recipe entry: what it takes, what it makes, and what it copies over
/// from the base item.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeDefinition {
    pub key: Identifier,
    /// The config key the recipe was declared under.
    pub id: String,
    pub result: ItemStack,
    pub template: IngredientMatcher,
    pub base: IngredientMatcher,
    pub addition: IngredientMatcher,
    pub copy_trim: bool,
    pub copy_enchantments: bool,
}

impl RecipeDefinition {
    /// The key is `namespace:<lowercased id>`.
    pub fn build(
        namespace: &str,
        id: &str,
        entry: &RecipeEntry,
        resolver: &ItemResolver,
    ) -> Result<Self, RecipeError> {
        Self::try_build(namespace, id, entry, resolver).map_err(|err| match err {
            RecipeError::InvalidRecipe { .. } => err,
            other => RecipeError::invalid(id, other),
        })
    }

    fn try_build(
        namespace: &str,
        id: &str,
        entry: &RecipeEntry,
        resolver: &ItemResolver,
    ) -> Result<Self, RecipeError> {
        let key = Identifier::new(namespace, &id.to_lowercase())
            .map_err(|err| RecipeError::invalid(id, err))?;

        let reference = |slot: &str, config| {
            let path = format!("{id}.{slot}");
            ItemReference::from_config(&path, config).map(|reference| (path, reference))
        };

        let (path, result) = reference("result", entry.result.as_ref())?;
        let result = resolver.resolve_item(&path, &result)?;

        let (path, template) = reference("template", entry.template.as_ref())?;
        let template = resolver.resolve_matcher(&path, &template)?;

        let (path, base) = reference("base", entry.base.as_ref())?;
        let base = resolver.resolve_matcher(&path, &base)?;

        let (path, addition) = reference("addition", entry.addition.as_ref())?;
        let addition = resolver.resolve_matcher(&path, &addition)?;

        Ok(Self {
            key,
            id: id.to_string(),
            result,
            template,
            base,
            addition,
            copy_trim: entry.copy_trim,
            copy_enchantments: entry.copy_enchantments,
        })
    }

    /// What gets handed to the crafting system.
    #[must_use]
    pub fn to_host_recipe(&self) -> SmithingTransformRecipe {
        SmithingTransformRecipe {
            key: self.key.clone(),
            result: self.result.clone(),
            template: self.template.clone(),
            base: self.base.clone(),
            addition: self.addition.clone(),
        }
    }
}
