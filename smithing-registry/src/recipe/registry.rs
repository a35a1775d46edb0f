use indexmap::IndexMap;
use log::{info, warn};
use smithing_config::RecipesConfig;
use smithing_core::Identifier;
use smithing_world::item::ItemCatalog;

use super::{ItemResolver, RecipeDefinition, RecipeHost};
use crate::error::RecipeError;

#[derive(Debug, Clone, PartialEq)]
pub enum RecipeLoadOutcome {
    Registered(Identifier),
    /// The crafting system already knew the key, nothing was overwritten.
    AlreadyExists(Identifier),
    Failed(RecipeError),
}

/// What happened to every recipe entry during a load, in file order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadReport {
    /// Recipes deregistered before loading.
    pub removed: usize,
    pub outcomes: Vec<(String, RecipeLoadOutcome)>,
}

impl LoadReport {
    #[must_use]
    pub fn registered(&self) -> usize {
        self.count(|outcome| matches!(outcome, RecipeLoadOutcome::Registered(_)))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, RecipeLoadOutcome::AlreadyExists(_)))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, RecipeLoadOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&RecipeLoadOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .count()
    }
}

/// The live set of smithing recipes.
///
/// Owns every [`RecipeDefinition`] it registered with the crafting system `H` and keeps
/// them in registration order, which is also the order recipes are matched in. The
/// registry is always rebuilt as a whole from configuration, never patched.
pub struct RecipeRegistry<H> {
    namespace: String,
    host: H,
    recipes: IndexMap<Identifier, RecipeDefinition>,
}

impl<H: RecipeHost> RecipeRegistry<H> {
    pub fn new(namespace: impl Into<String>, host: H) -> Self {
        Self {
            namespace: namespace.into(),
            host,
            recipes: IndexMap::new(),
        }
    }

    /// Drops every current recipe and registers all entries of `config`.
    ///
    /// A broken entry is logged and reported, the remaining entries still load.
    pub fn load_all(&mut self, config: &RecipesConfig, catalog: &dyn ItemCatalog) -> LoadReport {
        let removed = self.clear();
        let namespace = self.namespace.clone();
        let resolver = ItemResolver::new(catalog);
        let mut outcomes = Vec::with_capacity(config.len());

        for (id, entry) in config.entries() {
            let definition = entry
                .map_err(|err| RecipeError::invalid(id, err.message()))
                .and_then(|entry| RecipeDefinition::build(&namespace, id, &entry, &resolver));
            let outcome = match definition {
                Ok(definition) => self.register(definition),
                Err(err) => {
                    warn!("Failed to load recipe {id}: {err}");
                    RecipeLoadOutcome::Failed(err)
                }
            };
            outcomes.push((id.to_string(), outcome));
        }

        LoadReport { removed, outcomes }
    }

    /// Registers `definition` unless the crafting system already has its key.
    pub fn register(&mut self, definition: RecipeDefinition) -> RecipeLoadOutcome {
        let key = definition.key.clone();
        if self.host.is_registered(&key) {
            info!("Recipe {} already exists, skipping.", definition.id);
            return RecipeLoadOutcome::AlreadyExists(key);
        }

        self.host.register_recipe(definition.to_host_recipe());
        info!("Registered smithing transform recipe: {}", definition.id);
        self.recipes.insert(key.clone(), definition);
        RecipeLoadOutcome::Registered(key)
    }

    /// Deregisters everything this registry registered. Returns how many recipes were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.recipes.len();
        for key in self.recipes.keys() {
            self.host.deregister_recipe(key);
            info!("Removed recipe: {key}");
        }
        self.recipes.clear();
        removed
    }

    #[must_use]
    pub fn get(&self, key: &Identifier) -> Option<&RecipeDefinition> {
        self.recipes.get(key)
    }

    /// Recipes in registration order.
    pub fn recipes(&self) -> impl Iterator<Item = &RecipeDefinition> {
        self.recipes.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use smithing_core::text::TextComponent;
    use smithing_world::item::CatalogFile;

    use super::*;
    use crate::RecipeBook;

    const CATALOG: &str = r#"
        [relic_blade]
        material = "netherite_sword"
        [relic_shard]
        material = "echo_shard"
    "#;

    const RECIPES: &str = r#"
        [relic_blade]
        result = { nexo_item = "relic_blade" }
        template = { minecraft_item = "netherite_upgrade_smithing_template" }
        base = { minecraft_item = "diamond_sword" }
        addition = { nexo_item = "relic_shard" }

        [broken]
        result = { minecraft_item = "netherite_axe" }
        template = { minecraft_item = "netherite_upgrade_smithing_template" }
        addition = { minecraft_item = "netherite_ingot" }

        [netherite_boots]
        result = { minecraft_item = "netherite_boots" }
        template = { minecraft_item = "netherite_upgrade_smithing_template" }
        base = { minecraft_item = "diamond_boots" }
        addition = { minecraft_item = "netherite_ingot" }
        copy_trim = false
    "#;

    fn registry() -> RecipeRegistry<RecipeBook> {
        RecipeRegistry::new("smithing", RecipeBook::default())
    }

    fn load(registry: &mut RecipeRegistry<RecipeBook>, recipes: &str) -> LoadReport {
        let catalog = CatalogFile::parse(CATALOG).unwrap();
        registry.load_all(&RecipesConfig::parse(recipes).unwrap(), &catalog)
    }

    fn keys(registry: &RecipeRegistry<RecipeBook>) -> Vec<String> {
        registry.recipes().map(|r| r.key.to_string()).collect()
    }

    #[test]
    fn failures_are_isolated() {
        let mut registry = registry();
        let report = load(&mut registry, RECIPES);

        assert_eq!(report.registered(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 0);
        assert_eq!(report.outcomes[1].0, "broken");
        assert!(matches!(
            report.outcomes[1].1,
            RecipeLoadOutcome::Failed(RecipeError::InvalidRecipe { .. })
        ));
        assert_eq!(
            keys(&registry),
            ["smithing:relic_blade", "smithing:netherite_boots"]
        );
        assert_eq!(registry.host().len(), 2);
    }

    #[test]
    fn reload_is_idempotent() {
        let mut registry = registry();
        load(&mut registry, RECIPES);
        let first: Vec<RecipeDefinition> = registry.recipes().cloned().collect();

        let report = load(&mut registry, RECIPES);
        let second: Vec<RecipeDefinition> = registry.recipes().cloned().collect();

        assert_eq!(report.removed, 2);
        assert_eq!(report.skipped(), 0);
        assert_eq!(first, second);
        assert_eq!(registry.host().len(), 2);
    }

    #[test]
    fn registering_twice_is_a_no_op() {
        let mut registry = registry();
        load(&mut registry, RECIPES);
        let definition = registry.recipes().next().unwrap().clone();

        let outcome = registry.register(definition.clone());

        assert_eq!(outcome, RecipeLoadOutcome::AlreadyExists(definition.key));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.host().len(), 2);
    }

    #[test]
    fn stale_host_recipe_is_not_overwritten() {
        let mut registry = registry();
        load(&mut registry, RECIPES);
        let mut stale = registry.recipes().next().unwrap().to_host_recipe();

        // Someone else holds the key after our recipes are gone.
        registry.clear();
        stale.result.lore.push(TextComponent::text("Stale"));
        registry.host_mut().register_recipe(stale.clone());

        let report = load(&mut registry, RECIPES);
        assert_eq!(report.removed, 0);
        assert_eq!(report.skipped(), 1);
        assert_eq!(keys(&registry), ["smithing:netherite_boots"]);
        assert_eq!(registry.host().get(&stale.key), Some(&stale));
    }

    #[test]
    fn keys_folding_to_the_same_name_load_once() {
        let mut registry = registry();
        let report = load(
            &mut registry,
            r#"
            [Boots]
            result = { minecraft_item = "netherite_boots" }
            template = { minecraft_item = "netherite_upgrade_smithing_template" }
            base = { minecraft_item = "diamond_boots" }
            addition = { minecraft_item = "netherite_ingot" }

            [boots]
            result = { minecraft_item = "golden_boots" }
            template = { minecraft_item = "netherite_upgrade_smithing_template" }
            base = { minecraft_item = "iron_boots" }
            addition = { minecraft_item = "gold_ingot" }
            "#,
        );
        assert_eq!(report.registered(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(registry.recipes().next().unwrap().id, "Boots");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut registry = registry();
        load(&mut registry, RECIPES);
        assert_eq!(registry.clear(), 2);
        assert!(registry.host().is_empty());
        assert_eq!(registry.clear(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn malformed_entry_is_reported_as_invalid() {
        let mut registry = registry();
        let report = load(
            &mut registry,
            r#"
            [oops]
            copy_enchantments = 3
            "#,
        );
        assert_eq!(report.failed(), 1);
        assert!(registry.is_empty());
    }
}
