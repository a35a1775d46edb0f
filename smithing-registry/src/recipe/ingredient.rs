use std::str::FromStr;

use smithing_config::ItemReferenceConfig;
use smithing_world::item::{ItemCatalog, ItemStack, Material};

use crate::error::{RecipeError, ReferenceKind};

/// Prefix marking a catalog item when an item is written as a single token.
pub const CATALOG_PREFIX: &str = "nexo:";

#[derive(Clone, PartialEq, Debug, Eq, Hash)]
pub enum ItemReference {
    /// Custom item from the item catalog.
    Catalog(String),
    /// Vanilla item, matched against the native item table.
    Native(String),
}

impl ItemReference {
    /// The catalog id wins when both keys are present.
    pub fn from_config(
        path: &str,
        config: Option<&ItemReferenceConfig>,
    ) -> Result<Self, RecipeError> {
        let missing = || RecipeError::MissingReference {
            path: path.to_string(),
        };
        let config = config.ok_or_else(missing)?;

        if let Some(id) = &config.nexo_item {
            Ok(Self::Catalog(id.clone()))
        } else if let Some(id) = &config.minecraft_item {
            Ok(Self::Native(id.clone()))
        } else {
            Err(missing())
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ReferenceKind {
        match self {
            Self::Catalog(_) => ReferenceKind::Catalog,
            Self::Native(_) => ReferenceKind::Native,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Catalog(id) | Self::Native(id) => id,
        }
    }
}

/// `nexo:<id>` is a catalog item, anything else a vanilla item name.
impl FromStr for ItemReference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(());
        }
        Ok(match s.strip_prefix(CATALOG_PREFIX) {
            Some(id) if !id.is_empty() => Self::Catalog(id.to_string()),
            Some(_) => return Err(()),
            None => Self::Native(s.to_string()),
        })
    }
}

/// Decides whether an item may sit in an ingredient slot.
#[derive(Clone, PartialEq, Debug)]
pub enum IngredientMatcher {
    /// Only items carrying the same catalog id.
    Exact(ItemStack),
    /// Any item of this material, components ignored.
    Material(Material),
}

impl IngredientMatcher {
    #[must_use]
    pub fn test(&self, item: &ItemStack) -> bool {
        match self {
            Self::Exact(template) => {
                template.catalog_id.is_some() && template.catalog_id == item.catalog_id
            }
            Self::Material(material) => item.material == *material,
        }
    }
}

/// Turns [`ItemReference`]s into items and matchers.
pub struct ItemResolver<'a> {
    catalog: &'a dyn ItemCatalog,
}

impl<'a> ItemResolver<'a> {
    pub fn new(catalog: &'a dyn ItemCatalog) -> Self {
        Self { catalog }
    }

    /// `path` only shows up in the error, e.g. `relic_blade.result`.
    pub fn resolve_item(
        &self,
        path: &str,
        reference: &ItemReference,
    ) -> Result<ItemStack, RecipeError> {
        let resolved = match reference {
            ItemReference::Catalog(id) => self.catalog.lookup(id),
            ItemReference::Native(id) => Material::match_material(id).map(ItemStack::new),
        };
        resolved.ok_or_else(|| RecipeError::UnresolvedReference {
            path: path.to_string(),
            kind: reference.kind(),
            id: reference.id().to_string(),
        })
    }

    pub fn resolve_matcher(
        &self,
        path: &str,
        reference: &ItemReference,
    ) -> Result<IngredientMatcher, RecipeError> {
        let item = self.resolve_item(path, reference)?;
        Ok(match reference {
            ItemReference::Catalog(_) => IngredientMatcher::Exact(item),
            ItemReference::Native(_) => IngredientMatcher::Material(item.material),
        })
    }
}

#[cfg(test)]
mod tests {
    use smithing_world::item::CatalogFile;

    use super::*;

    fn catalog() -> CatalogFile {
        CatalogFile::parse(
            r#"
            [relic_shard]
            material = "echo_shard"
            [other_shard]
            material = "echo_shard"
            "#,
        )
        .unwrap()
    }

    fn reference(nexo: Option<&str>, minecraft: Option<&str>) -> ItemReferenceConfig {
        ItemReferenceConfig {
            nexo_item: nexo.map(str::to_string),
            minecraft_item: minecraft.map(str::to_string),
        }
    }

    #[test]
    fn catalog_id_takes_priority() {
        let config = reference(Some("relic_shard"), Some("echo_shard"));
        assert_eq!(
            ItemReference::from_config("r.addition", Some(&config)),
            Ok(ItemReference::Catalog("relic_shard".to_string()))
        );
    }

    #[test]
    fn absent_reference_is_missing() {
        let expected = Err(RecipeError::MissingReference {
            path: "r.base".to_string(),
        });
        assert_eq!(ItemReference::from_config("r.base", None), expected);
        assert_eq!(
            ItemReference::from_config("r.base", Some(&reference(None, None))),
            expected
        );
    }

    #[test]
    fn unresolvable_references_fail() {
        let catalog = catalog();
        let resolver = ItemResolver::new(&catalog);

        let err = resolver
            .resolve_item("r.result", &ItemReference::Catalog("ghost".into()))
            .unwrap_err();
        assert_eq!(
            err,
            RecipeError::UnresolvedReference {
                path: "r.result".into(),
                kind: ReferenceKind::Catalog,
                id: "ghost".into(),
            }
        );
        assert!(resolver
            .resolve_matcher("r.base", &ItemReference::Native("diamond_spoon".into()))
            .is_err());
    }

    #[test]
    fn exact_matcher_compares_catalog_ids() {
        let catalog = catalog();
        let resolver = ItemResolver::new(&catalog);
        let matcher = resolver
            .resolve_matcher("r.addition", &ItemReference::Catalog("relic_shard".into()))
            .unwrap();

        assert!(matcher.test(&catalog.lookup("relic_shard").unwrap()));
        assert!(!matcher.test(&catalog.lookup("other_shard").unwrap()));
        // a plain echo shard is not the custom one
        let plain = ItemStack::new(Material::named("echo_shard").unwrap());
        assert!(!matcher.test(&plain));
    }

    #[test]
    fn material_matcher_ignores_components() {
        let catalog = catalog();
        let resolver = ItemResolver::new(&catalog);
        let matcher = resolver
            .resolve_matcher("r.base", &ItemReference::Native("ECHO_SHARD".into()))
            .unwrap();
        assert_eq!(
            matcher,
            IngredientMatcher::Material(Material::named("echo_shard").unwrap())
        );
        assert!(matcher.test(&catalog.lookup("relic_shard").unwrap()));
        assert!(!matcher.test(&ItemStack::new(Material::named("diamond").unwrap())));
    }

    #[test]
    fn parses_item_tokens() {
        assert_eq!(
            "nexo:relic_shard".parse(),
            Ok(ItemReference::Catalog("relic_shard".into()))
        );
        assert_eq!(
            "minecraft:diamond".parse(),
            Ok(ItemReference::Native("minecraft:diamond".into()))
        );
        assert_eq!("nexo:".parse::<ItemReference>(), Err(()));
    }
}
