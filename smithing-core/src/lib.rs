pub mod identifier;
pub mod text;

pub use identifier::Identifier;
