use crate::Conversion;
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    scheme: String,
    output: String,
    words: Vec<String>,
}

impl From<&Conversion> for JsonConversion {
    fn from(c: &Conversion) -> Self {
        Self {
            input: c.input.clone(),
            scheme: c.scheme.to_string(),
            output: c.output.clone(),
            words: c.words.clone(),
        }
    }
}

/// Print rendered names. With `grouped`, every input gets a header and one
/// `scheme  output` line per conversion.
pub fn print_conversions(
    conversions: &[Conversion],
    grouped: bool,
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", format_text(conversions, grouped, colored_output));
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", format_json(conversions)?);
            Ok(())
        }
    }
}

fn format_text(conversions: &[Conversion], grouped: bool, colored_output: bool) -> String {
    let mut out = String::new();

    if !grouped {
        for c in conversions {
            out.push_str(&c.output);
            out.push('\n');
        }
        return out;
    }

    let mut last_input: Option<&str> = None;
    for c in conversions {
        if last_input != Some(c.input.as_str()) {
            if last_input.is_some() {
                out.push('\n');
            }
            let header = format!("{:?}", c.input);
            if colored_output {
                out.push_str(&format!("{}\n", header.bold().underline()));
            } else {
                out.push_str(&format!("{}\n", header));
            }
            last_input = Some(c.input.as_str());
        }

        let scheme = format!("{:<11}", c.scheme.as_str());
        if colored_output {
            out.push_str(&format!("  {} {}\n", scheme.blue(), c.output.green().bold()));
        } else {
            out.push_str(&format!("  {} {}\n", scheme, c.output));
        }
    }

    out
}

fn format_json(conversions: &[Conversion]) -> Result<String> {
    let items: Vec<JsonConversion> = conversions.iter().map(JsonConversion::from).collect();
    serde_json::to_string_pretty(&items).context("Failed to serialize conversions")
}

/// Report one name that is not already written in its target scheme.
pub fn print_mismatch(conversion: &Conversion, colored_output: bool) {
    if colored_output {
        println!(
            "  {} {} {} {}",
            conversion.input.red().bold(),
            "is not".dimmed(),
            conversion.scheme.as_str().cyan(),
            format!("(expected {})", conversion.output.green()).dimmed()
        );
    } else {
        println!(
            "  {} is not {} (expected {})",
            conversion.input, conversion.scheme, conversion.output
        );
    }
}

pub fn print_check_summary(mismatches: usize, total: usize, colored: bool) {
    println!();
    if mismatches == 0 {
        let message = format!(
            "✓ All {} {} already in the target scheme",
            total,
            if total == 1 { "name" } else { "names" }
        );
        if colored {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message);
        }
    } else {
        let name_word = if mismatches == 1 { "name" } else { "names" };
        if colored {
            println!(
                "{} {} {} of {} not in the target scheme",
                "✗".red().bold(),
                mismatches.to_string().red().bold(),
                name_word,
                total
            );
        } else {
            println!(
                "✗ {} {} of {} not in the target scheme",
                mismatches, name_word, total
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scheme;

    fn conversion(input: &str, scheme: Scheme, output: &str) -> Conversion {
        Conversion {
            input: input.to_string(),
            scheme,
            output: output.to_string(),
            words: Vec::new(),
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_plain_text_is_one_line_per_name() {
        let items = [
            conversion("a b", Scheme::Snake, "a_b"),
            conversion("c d", Scheme::Snake, "c_d"),
        ];
        assert_eq!(format_text(&items, false, false), "a_b\nc_d\n");
    }

    #[test]
    fn test_grouped_text() {
        let items = [
            conversion("user id", Scheme::Camel, "userId"),
            conversion("user id", Scheme::Kebab, "user-id"),
        ];
        let text = format_text(&items, true, false);
        assert_eq!(text, "\"user id\"\n  camelCase   userId\n  kebab-case  user-id\n");
    }

    #[test]
    fn test_json_uses_scheme_identifiers() {
        let items = [conversion("user id", Scheme::Pascal, "UserId")];
        let json = format_json(&items).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["scheme"], "PascalCase");
        assert_eq!(value[0]["output"], "UserId");
    }
}
