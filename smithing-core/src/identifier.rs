use std::{fmt, str::FromStr};

use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const VANILLA_NAMESPACE: &str = "minecraft";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Invalid namespace '{0}', only [a-z0-9._-] are allowed")]
    InvalidNamespace(String),
    #[error("Invalid path '{0}', only [a-z0-9._-/] are allowed")]
    InvalidPath(String),
}

/// A namespaced key such as `minecraft:diamond_sword`.
///
/// Both parts are validated on construction, so an `Identifier` that exists is always
/// something a client would accept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    pub fn new(namespace: &str, path: &str) -> Result<Self, IdentifierError> {
        if namespace.is_empty() || !namespace.chars().all(is_valid_namespace_char) {
            return Err(IdentifierError::InvalidNamespace(namespace.to_string()));
        }
        if path.is_empty() || !path.chars().all(is_valid_path_char) {
            return Err(IdentifierError::InvalidPath(path.to_string()));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Panics when `path` is not a valid path. Meant for constants.
    #[must_use]
    pub fn vanilla(path: &str) -> Self {
        Self::new(VANILLA_NAMESPACE, path).expect("vanilla identifier must be valid")
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

const fn is_valid_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-')
}

const fn is_valid_path_char(c: char) -> bool {
    is_valid_namespace_char(c) || c == '/'
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Parses `namespace:path`, falling back to the vanilla namespace when there is no colon.
impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(VANILLA_NAMESPACE, s),
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdentifierVisitor;

        impl Visitor<'_> for IdentifierVisitor {
            type Value = Identifier;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a valid Identifier (namespace:path)")
            }

            fn visit_str<E>(self, identifier: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                identifier.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(IdentifierVisitor)
    }
}
