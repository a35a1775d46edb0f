use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("neither nexo_item nor minecraft_item is set for {path}")]
    MissingReference { path: String },
    #[error("unknown {kind} '{id}' for {path}")]
    UnresolvedReference {
        path: String,
        kind: ReferenceKind,
        id: String,
    },
    #[error("Invalid recipe configuration for {id}: {reason}")]
    InvalidRecipe { id: String, reason: String },
}

impl RecipeError {
    pub(crate) fn invalid(id: &str, reason: impl fmt::Display) -> Self {
        Self::InvalidRecipe {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Catalog,
    Native,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Catalog => "nexo_item",
            Self::Native => "minecraft_item",
        })
    }
}
