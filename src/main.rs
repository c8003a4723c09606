use gog::config::Config;
use gog::core::Selection;
use gog::document::DocumentManager;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// gog - Go domain boilerplate generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate constructor, getters, IsZero and hydrator for the struct under the cursor
    Generate {
        /// Go file to process
        file: PathBuf,

        /// Line of the cursor, or first selected line (1-based)
        #[arg(long, short = 'l', value_parser = clap::value_parser!(u32).range(1..))]
        line: u32,

        /// Last selected line (1-based, defaults to --line)
        #[arg(long, short = 'e', value_parser = clap::value_parser!(u32).range(1..))]
        end_line: Option<u32>,

        /// Append the generated code to the file and save it
        #[arg(long, short = 'w')]
        write: bool,

        /// Directory to search for gog.toml (defaults to the file's directory)
        #[arg(long, short = 'c')]
        config_dir: Option<PathBuf>,
    },

    /// Print the structs, methods and functions found in a Go file as JSON
    Inspect {
        /// Go file to inspect
        file: PathBuf,

        /// Directory to search for gog.toml (defaults to the file's directory)
        #[arg(long, short = 'c')]
        config_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Generate {
            file,
            line,
            end_line,
            write,
            config_dir,
        } => {
            let selection = Selection::new(
                line as usize - 1,
                end_line.unwrap_or(line) as usize - 1,
            );
            generate_command(&file, selection, write, config_dir.as_deref())
        }
        Commands::Inspect { file, config_dir } => inspect_command(&file, config_dir.as_deref()),
    }
}

/// Load configuration and set up logging on stderr.
///
/// RUST_LOG takes precedence over the configured log_level; the default is "warn".
fn setup(file: &Path, config_dir: Option<&Path>) -> Result<DocumentManager> {
    let manager = DocumentManager::discover(config_dir.unwrap_or(file))
        .context("Failed to load gog.toml")?;

    init_logging(manager.config())?;
    Ok(manager)
}

fn init_logging(config: &Config) -> Result<()> {
    let default_level = config.log_level.as_deref().unwrap_or("warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn generate_command(
    file: &Path,
    selection: Selection,
    write: bool,
    config_dir: Option<&Path>,
) -> Result<()> {
    let manager = setup(file, config_dir)?;

    info!("Generating code for: {}", file.display());
    let mut document = manager.open(file)?;
    let code = manager.generate(&document, selection)?;

    if write || manager.config().write {
        if let Some(edit) = manager.apply(&mut document, &code)? {
            info!(
                "Appended {} declarations at line {}",
                code.fragments().len(),
                edit.range.start.line + 1
            );
        }
    } else {
        // Output to stdout
        print!("{}", code.render());
    }

    Ok(())
}

fn inspect_command(file: &Path, config_dir: Option<&Path>) -> Result<()> {
    let manager = setup(file, config_dir)?;

    let document = manager.open(file)?;
    println!("{}", manager.inspect(&document)?);

    Ok(())
}
