mod definition;
mod host;
mod ingredient;
mod registry;

pub use definition::RecipeDefinition;
pub use host::{RecipeBook, RecipeHost, SmithingTransformRecipe};
pub use ingredient::{IngredientMatcher, ItemReference, ItemResolver, CATALOG_PREFIX};
pub use registry::{LoadReport, RecipeLoadOutcome, RecipeRegistry};
