//! Wordstyle CLI - resolve table style configurations

mod report;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wordstyle_core::prelude::*;

#[derive(Parser)]
#[command(name = "wordstyle")]
#[command(
    author,
    version,
    about = "Resolve table style configurations the way a document writer sees them"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every property of the resolved style
    Inspect(StyleArgs),

    /// Print the resolved style as JSON
    Json(StyleArgs),
}

#[derive(Args)]
struct StyleArgs {
    /// JSON file with the base table style
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// JSON file with the header-row style
    #[arg(short, long)]
    first_row: Option<PathBuf>,

    /// Fail on unknown properties or invalid values instead of skipping them
    #[arg(short, long)]
    strict: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Inspect(args) => {
            let style = resolve(&args)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report::write_report(&mut out, &style).context("Failed to write report")?;
            out.flush()?;
        }
        Commands::Json(args) => {
            let style = resolve(&args)?;
            let json = serde_json::to_string_pretty(&style).context("Failed to serialize style")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn resolve(args: &StyleArgs) -> Result<TableStyle> {
    let base = args.base.as_deref().map(load_config).transpose()?;
    let first_row = args.first_row.as_deref().map(load_config).transpose()?;
    let strictness = if args.strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };

    TableStyle::try_from_config(base.as_ref(), first_row.as_ref(), strictness)
        .context("Style configuration rejected")
}

fn load_config(path: &Path) -> Result<StyleConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let config: StyleConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse '{}' as a style map", path.display()))?;
    log::debug!("Loaded {} properties from {}", config.len(), path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn config_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn args(base: &NamedTempFile, first_row: Option<&NamedTempFile>, strict: bool) -> StyleArgs {
        StyleArgs {
            base: Some(base.path().to_path_buf()),
            first_row: first_row.map(|f| f.path().to_path_buf()),
            strict,
        }
    }

    #[test]
    fn test_resolve_base_and_first_row() {
        let base = config_file(r#"{"width": 4000, "unit": "dxa", "cellMargin": 60}"#);
        let first_row = config_file(r#"{"bgColor": "CCCCCC"}"#);

        let style = resolve(&args(&base, Some(&first_row), false)).unwrap();
        assert_eq!(style.width(), 4000.0);
        assert_eq!(style.unit(), WidthUnit::Dxa);

        let header = style.first_row().unwrap();
        assert_eq!(header.bg_color(), Some("CCCCCC"));
        assert!(!header.has_margin());
    }

    #[test]
    fn test_strict_rejects_unknown_property() {
        let base = config_file(r#"{"width": 4000, "layout": "fixed"}"#);

        assert!(resolve(&args(&base, None, false)).is_ok());
        let err = resolve(&args(&base, None, true)).unwrap_err();
        assert!(err.root_cause().to_string().contains("layout"));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let base = config_file("[1, 2, 3]");
        let err = resolve(&args(&base, None, false)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = load_config(Path::new("/nonexistent/table-style.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
