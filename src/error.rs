use thiserror::Error;

/// Errors produced by the conversion engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A scheme identifier outside camelCase, PascalCase, snake_case, kebab-case.
    #[error("invalid scheme '{0}' (expected one of: camelCase, PascalCase, snake_case, kebab-case)")]
    InvalidScheme(String),

    /// Only raised under `SymbolPolicy::Reject`.
    #[error("unsupported character {ch:?} at byte {offset}")]
    UnsupportedCharacter { ch: char, offset: usize },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
