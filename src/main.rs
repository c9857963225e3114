use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::io;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use varcase::cli::output::{self, OutputFormat};
use varcase::config::{Overrides, LOCAL_CONFIG_FILE};
use varcase::{Config, Conversion, Converter, Scheme};

#[derive(Parser, Debug)]
#[command(name = "varcase")]
#[command(version, about = "Convert names between camelCase, PascalCase, snake_case and kebab-case", long_about = None)]
struct Cli {
    /// Names to convert
    #[arg(value_name = "NAMES")]
    names: Vec<String>,

    /// Target scheme: camelCase, PascalCase, snake_case or kebab-case
    #[arg(short, long)]
    scheme: Option<Scheme>,

    /// Render every name in all four schemes
    #[arg(short, long, conflicts_with = "scheme")]
    all: bool,

    /// Keep all-uppercase words (HTTP, XML) intact in camelCase and PascalCase
    #[arg(long)]
    preserve_acronyms: bool,

    /// Reject names containing symbols other than spaces, '_' and '-'
    #[arg(long)]
    strict: bool,

    /// Report names that are not already in the target scheme instead of converting
    #[arg(long, conflicts_with = "all")]
    check: bool,

    /// Exit with code 0 even if --check finds mismatches
    #[arg(long, requires = "check")]
    no_fail: bool,

    /// Prompt for a name and pick the scheme from a list
    #[arg(short, long, conflicts_with_all = ["names", "check"])]
    interactive: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print config file locations
    Path,
    /// Write the default configuration to the global config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "varcase", &mut io::stdout());
        return Ok(());
    }

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let config = Config::load(Overrides {
        scheme: cli.scheme,
        preserve_acronyms: cli.preserve_acronyms,
        strict: cli.strict,
    })?;
    debug!(?config, "configuration loaded");

    let converter = Converter::new(config.options());
    let colored = !cli.no_color;

    let (names, target) = if cli.interactive {
        let (name, scheme) = prompt(cli.scheme, config.default_scheme)?;
        (vec![name], scheme)
    } else {
        (cli.names, config.default_scheme)
    };

    if names.is_empty() {
        anyhow::bail!("No names specified. Use --help for usage information.");
    }

    let schemes: Vec<Scheme> = if cli.all {
        Scheme::ALL.to_vec()
    } else {
        vec![target]
    };

    let mut conversions = Vec::with_capacity(names.len() * schemes.len());
    for name in &names {
        for &scheme in &schemes {
            let conversion = converter
                .conversion(name, scheme)
                .with_context(|| format!("Failed to convert {:?}", name))?;
            conversions.push(conversion);
        }
    }

    if cli.check {
        let mismatches: Vec<&Conversion> =
            conversions.iter().filter(|c| !c.is_unchanged()).collect();
        for conversion in &mismatches {
            output::print_mismatch(conversion, colored);
        }
        output::print_check_summary(mismatches.len(), conversions.len(), colored);

        if !mismatches.is_empty() && !cli.no_fail {
            std::process::exit(1);
        }
        return Ok(());
    }

    output::print_conversions(&conversions, cli.all, colored, cli.format)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Ask for a name, and for a scheme unless one was given on the command line.
fn prompt(scheme: Option<Scheme>, default: Scheme) -> Result<(String, Scheme)> {
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Name")
        .allow_empty(true)
        .interact_text()?;

    if let Some(scheme) = scheme {
        return Ok((name, scheme));
    }

    let labels: Vec<&str> = Scheme::ALL.iter().map(|s| s.as_str()).collect();
    let default_index = Scheme::ALL.iter().position(|&s| s == default).unwrap_or(0);
    let index = Select::with_theme(&theme)
        .with_prompt("Scheme")
        .items(&labels)
        .default(default_index)
        .interact()?;

    Ok((name, Scheme::ALL[index]))
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Config { action } => match action {
            ConfigCommands::Show => {
                let config = Config::load(Overrides::default())?;
                print!("{}", config.to_toml()?);
            }
            ConfigCommands::Path => {
                match Config::global_config_path() {
                    Some(path) => print_path("global", &path),
                    None => println!("global: unavailable"),
                }
                print_path("local", Path::new(LOCAL_CONFIG_FILE));
            }
            ConfigCommands::Init { force } => {
                let path = Config::global_config_path()
                    .context("Failed to determine config directory")?;
                Config::default().write_to(&path, force)?;
                println!("Wrote {}", path.display());
            }
        },
    }
    Ok(())
}

fn print_path(label: &str, path: &Path) {
    let state = if path.exists() { "" } else { " (not found)" };
    println!("{}: {}{}", label, path.display(), state);
}
