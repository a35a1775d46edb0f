use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use smithing_config::{ConfigError, RecipesConfig};
use smithing_core::Identifier;
use smithing_inventory::{PrepareSmithingEvent, SmithingTable};
use smithing_registry::{ItemReference, ItemResolver, LoadReport, RecipeBook, RecipeRegistry};
use smithing_world::item::{CatalogFile, ItemStack};

use crate::command::{default_dispatcher, dispatcher::CommandDispatcher};

/// Shared state behind the console.
pub struct Server {
    /// Recipes currently known to the crafting system. Reloads hold the write guard for
    /// the whole clear and repopulate.
    pub registry: RwLock<RecipeRegistry<RecipeBook>>,
    pub catalog: CatalogFile,
    pub(crate) recipes_path: PathBuf,
    pub command_dispatcher: Arc<CommandDispatcher>,
}

impl Server {
    #[must_use]
    pub fn new(namespace: &str, recipes_path: PathBuf, catalog: CatalogFile) -> Self {
        Self {
            registry: RwLock::new(RecipeRegistry::new(namespace, RecipeBook::default())),
            catalog,
            recipes_path,
            command_dispatcher: Arc::new(default_dispatcher()),
        }
    }

    /// Re-reads the recipe file and rebuilds the registry from it.
    ///
    /// The file is read before the registry is locked, so an unreadable file leaves the
    /// current recipes in place.
    pub fn reload_recipes(&self) -> Result<LoadReport, ConfigError> {
        let config = RecipesConfig::read(&self.recipes_path)?;
        let mut registry = self.registry.write();
        Ok(registry.load_all(&config, &self.catalog))
    }

    /// Runs a smithing preview, returning the key of the recipe that produced the result.
    pub fn prepare_smithing(&self, event: &mut PrepareSmithingEvent) -> Option<Identifier> {
        let registry = self.registry.read();
        SmithingTable::new(&registry)
            .on_prepare_smithing(event)
            .map(|recipe| recipe.key.clone())
    }

    /// Resolves a console item token: `nexo:<id>` for catalog items, a vanilla name
    /// otherwise.
    pub fn resolve_item(&self, token: &str) -> Option<ItemStack> {
        let reference = token.parse::<ItemReference>().ok()?;
        ItemResolver::new(&self.catalog)
            .resolve_item(token, &reference)
            .ok()
    }
}
