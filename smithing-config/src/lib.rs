use log::warn;
use logging::LoggingConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use thiserror::Error;

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

pub mod logging;
pub mod recipes;

pub use commands::CommandsConfig;
pub use recipes::{ItemReferenceConfig, RecipeEntry, RecipesConfig};

mod commands;

pub static SMITHING_CONFIG: LazyLock<SmithingConfiguration> =
    LazyLock::new(SmithingConfiguration::load);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Couldn't parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything that is not a recipe. Recipes live in their own file so they can be
/// reloaded without touching the rest.
#[serde_inline_default]
#[derive(Deserialize, Serialize)]
pub struct SmithingConfiguration {
    /// Namespace of every recipe key, e.g. `smithing:relic_upgrade`.
    #[serde_inline_default("smithing".to_string())]
    pub namespace: String,
    /// File holding the recipe entries.
    #[serde_inline_default(PathBuf::from("recipes.toml"))]
    pub recipes_path: PathBuf,
    /// File holding the custom item catalog.
    #[serde_inline_default(PathBuf::from("items.toml"))]
    pub catalog_path: PathBuf,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
}

impl Default for SmithingConfiguration {
    fn default() -> Self {
        Self {
            namespace: "smithing".to_string(),
            recipes_path: PathBuf::from("recipes.toml"),
            catalog_path: PathBuf::from("items.toml"),
            logging: LoggingConfig::default(),
            commands: CommandsConfig::default(),
        }
    }
}

trait LoadTomlConfiguration {
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = Self::get_path();

        let config = if path.exists() {
            let file_content = fs::read_to_string(path)
                .unwrap_or_else(|_| panic!("Couldn't read configuration file at {path:?}"));

            toml::from_str(&file_content).unwrap_or_else(|err: toml::de::Error| {
                panic!(
                    "Couldn't parse config at {path:?}. Reason: {}. This is probably caused by a config update, just delete the old config and start again",
                    err.message()
                )
            })
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!("Couldn't write default config to {path:?}. Reason: {err}");
                    }
                }
                Err(err) => warn!("Couldn't serialize default config for {path:?}. Reason: {err}"),
            }

            content
        };

        config.validate();
        config
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadTomlConfiguration for SmithingConfiguration {
    fn get_path() -> &'static Path {
        Path::new("smithing.toml")
    }

    fn validate(&self) {
        self.validate_namespace();
        assert!(
            !self.recipes_path.as_os_str().is_empty(),
            "recipes_path must not be empty"
        );
        assert!(
            !self.catalog_path.as_os_str().is_empty(),
            "catalog_path must not be empty"
        );
    }
}

impl SmithingConfiguration {
    fn validate_namespace(&self) {
        assert!(
            !self.namespace.is_empty()
                && self
                    .namespace
                    .chars()
                    .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-')),
            "namespace must only contain [a-z0-9._-], got '{}'",
            self.namespace
        );
    }
}
