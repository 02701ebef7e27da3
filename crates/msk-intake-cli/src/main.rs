//! Terminal front end: reads interview notes and prints the case draft.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use msk_intake_core::{catalog, CaseExport, Pipeline, ProfileCatalog};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "msk-intake")]
#[command(about = "Draft case summaries and SOAP notes from interview notes", long_about = None)]
struct Cli {
    /// Custom region profile catalog (JSON)
    #[arg(long, global = true, env = "MSK_INTAKE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a case draft from notes
    Generate {
        /// Notes text; read from --file or stdin when omitted
        #[arg(short, long, conflicts_with = "file")]
        notes: Option<String>,

        /// File containing the notes
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List catalog regions and keywords
    Catalog {
        /// Print the full catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Generate {
            notes,
            file,
            format,
        } => {
            let notes = read_notes(notes, file.as_deref())?;
            let case = Pipeline::new(&catalog).generate(&notes)?;
            info!(region = %case.output.region, "generated case");

            let export = CaseExport::from_case(&case);
            match format {
                Format::Text => print!("{}", export.to_text()),
                Format::Json => println!("{}", export.to_json()?),
            }
        }
        Commands::Catalog { json } => {
            if json {
                println!("{}", catalog.to_json()?);
            } else {
                for profile in catalog.profiles() {
                    println!("{:<10} {}", profile.region, profile.keywords.join(", "));
                }
                println!("{:<10} (fallback)", catalog.default_profile().region);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<ProfileCatalog> {
    match path {
        Some(path) => {
            let catalog = ProfileCatalog::from_path(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            info!(path = %path.display(), regions = catalog.profiles().len(), "loaded custom catalog");
            Ok(catalog)
        }
        None => {
            debug!("using built-in catalog");
            Ok(catalog::builtin().clone())
        }
    }
}

fn read_notes(notes: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(notes) = notes {
        return Ok(notes);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read notes from {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read notes from stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from(["msk-intake", "generate", "--notes", "knee pain", "--format", "json"]);
        match cli.command {
            Commands::Generate { notes, file, format } => {
                assert_eq!(notes.as_deref(), Some("knee pain"));
                assert!(file.is_none());
                assert!(matches!(format, Format::Json));
            }
            Commands::Catalog { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn test_notes_and_file_conflict() {
        let result = Cli::try_parse_from([
            "msk-intake", "generate", "--notes", "x", "--file", "notes.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_notes_prefers_inline_text() {
        let notes = read_notes(Some("neck pain".into()), Some(Path::new("/nonexistent"))).unwrap();
        assert_eq!(notes, "neck pain");
    }

    #[test]
    fn test_read_notes_missing_file() {
        assert!(read_notes(None, Some(Path::new("/nonexistent/notes.txt"))).is_err());
    }

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.profiles().len(), 4);
    }
}
