pub use error::{RecipeError, ReferenceKind};
pub use recipe::{
    IngredientMatcher, ItemReference, ItemResolver, LoadReport, RecipeBook, RecipeDefinition,
    RecipeHost, RecipeLoadOutcome, RecipeRegistry, SmithingTransformRecipe, CATALOG_PREFIX,
};

mod error;
mod recipe;
