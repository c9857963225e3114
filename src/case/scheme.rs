use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    #[serde(rename = "camelCase")]
    Camel,
    #[serde(rename = "PascalCase")]
    Pascal,
    #[serde(rename = "snake_case")]
    Snake,
    #[serde(rename = "kebab-case")]
    Kebab,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [Scheme::Camel, Scheme::Pascal, Scheme::Snake, Scheme::Kebab];

    /// The identifier callers use to select this scheme, e.g. `snake_case`.
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Camel => "camelCase",
            Scheme::Pascal => "PascalCase",
            Scheme::Snake => "snake_case",
            Scheme::Kebab => "kebab-case",
        }
    }

    pub fn separator(self) -> &'static str {
        match self {
            Scheme::Camel | Scheme::Pascal => "",
            Scheme::Snake => "_",
            Scheme::Kebab => "-",
        }
    }

    /// How the word at `index` is cased.
    pub(crate) fn casing(self, index: usize) -> WordCasing {
        match self {
            Scheme::Camel if index == 0 => WordCasing::Lower,
            Scheme::Camel | Scheme::Pascal => WordCasing::Capitalized,
            Scheme::Snake | Scheme::Kebab => WordCasing::Lower,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WordCasing {
    Lower,
    Capitalized,
}

impl FromStr for Scheme {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| ConvertError::InvalidScheme(s.to_string()))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
