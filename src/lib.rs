pub mod case;
pub mod cli;
pub mod config;
pub mod error;

pub use case::render::{render, render_with};
pub use case::scheme::Scheme;
pub use case::tokenizer::{tokenize, tokenize_with, Word, WordSequence};
pub use case::{AcronymStyle, Converter, Options, Request, SymbolPolicy};
pub use config::Config;
pub use error::{ConvertError, Result};

/// Convert `text` to the scheme named by `scheme` (`"camelCase"`,
/// `"PascalCase"`, `"snake_case"` or `"kebab-case"`) with default options.
pub fn convert(text: &str, scheme: &str) -> Result<String> {
    let scheme: Scheme = scheme.parse()?;
    Ok(render(&tokenize(text), scheme))
}

/// One rendered name, as reported by the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub scheme: Scheme,
    pub output: String,
    pub words: Vec<String>,
}

impl Conversion {
    /// True when the input was already written in the target scheme.
    pub fn is_unchanged(&self) -> bool {
        self.input == self.output
    }
}
