use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

use weft_config::config::{PROJECT_FILE, STARTER_CONFIG};
use weft_config::BuildConfig;

/// Configuration front end for the Weft utility CSS generator.
///
/// Validates and inspects a build configuration without running a build.
#[derive(Parser, Debug)]
#[command(name = "weft-config")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    ///
    /// If not specified, resolution order is ./weft.toml, $WEFT_CONFIG,
    /// then the user configuration directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration and report what it declares
    Check,
    /// Print the resolved configuration
    Show {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// Write a starter configuration file
    Init {
        /// Where to write the file
        #[arg(default_value = PROJECT_FILE)]
        path: PathBuf,
    },
}

fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve(explicit: Option<PathBuf>) -> Result<(PathBuf, BuildConfig)> {
    let path = match explicit {
        Some(path) => path,
        None => weft_config::discover()?,
    };

    debug!("Resolved configuration path: {}", path.display());
    let config = BuildConfig::load(&path)?;
    Ok((path, config))
}

fn check(path: &Path, config: &BuildConfig) -> Result<()> {
    println!("{}: ok", path.display());

    println!("  content globs: {}", config.content_globs().len());
    for glob in config.content_globs() {
        println!("    {glob}");
    }

    let theme = config.theme();
    println!("  theme extensions: {} token(s)", theme.len());
    for category in theme.categories() {
        if let Some(tokens) = theme.category(category) {
            for (name, value) in tokens {
                println!("    {category}.{name} = {value}");
            }
        }
    }

    println!("  plugins: {}", config.plugins().len());
    for plugin in config.plugins() {
        println!("    {plugin}");
    }

    Ok(())
}

fn show(config: &BuildConfig, format: &str) -> Result<()> {
    let rendered = match format {
        "toml" => toml::to_string_pretty(config)?,
        "json" => serde_json::to_string_pretty(config)?,
        other => bail!("Unknown output format: {other} (expected toml or json)"),
    };

    println!("{rendered}");
    Ok(())
}

fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists, refusing to overwrite", path.display());
    }

    std::fs::write(path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    match args.command {
        Command::Check => {
            let (path, config) = resolve(args.config)?;
            check(&path, &config)
        }
        Command::Show { format } => {
            let (_, config) = resolve(args.config)?;
            show(&config, &format)
        }
        Command::Init { path } => init(&path),
    }
}
