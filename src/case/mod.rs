pub mod render;
pub mod scheme;
pub mod tokenizer;

use crate::error::Result;
use crate::Conversion;
use render::render_with;
use scheme::Scheme;
use serde::{Deserialize, Serialize};
use tokenizer::tokenize_with;
use tracing::debug;

/// How words that were all-uppercase in the input are rendered in
/// capitalized positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcronymStyle {
    /// `HTTP` -> `Http`
    #[default]
    Collapse,
    /// `HTTP` stays `HTTP`
    Preserve,
}

/// What the tokenizer does with characters that are neither alphanumeric
/// nor a delimiter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPolicy {
    /// Treat them as word boundaries and drop them.
    #[default]
    Split,
    /// Fail with `UnsupportedCharacter`.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub acronyms: AcronymStyle,
    pub symbols: SymbolPolicy,
}

/// A single conversion request, as sent by a front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub text: String,
    pub scheme: String,
}

/// Stateless converter carrying the tokenizing and rendering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn convert(&self, text: &str, scheme: Scheme) -> Result<String> {
        self.conversion(text, scheme).map(|c| c.output)
    }

    /// Handle a front-end request; an unknown scheme identifier fails with
    /// `InvalidScheme` before the text is looked at.
    pub fn submit(&self, request: &Request) -> Result<String> {
        let scheme: Scheme = request.scheme.parse()?;
        self.convert(&request.text, scheme)
    }

    /// Convert and keep the intermediate words for reporting.
    pub fn conversion(&self, text: &str, scheme: Scheme) -> Result<Conversion> {
        let words = tokenize_with(text, self.options.symbols)?;
        let output = render_with(&words, scheme, self.options.acronyms);
        debug!(input = text, %scheme, words = words.len(), output = %output, "converted");
        Ok(Conversion {
            input: text.to_string(),
            scheme,
            output,
            words: words.iter().map(|w| w.as_str().to_string()).collect(),
        })
    }
}
