mod logging;
mod output;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{error, info};

use factorygen_core::{Error as CoreError, ProjectConfig};
use factorygen_generate::{Generator, ModelRegistry, RustRenderer, discover};
use factorygen_introspect::{SnapshotIntrospector, load_snapshot};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "factorygen", version, about = "Generate test factories for models")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate factory source for discovered models.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Which models to include; each entry may be comma-separated.
    #[arg(value_name = "MODEL")]
    model: Vec<String>,
    /// Path of the generated factory file.
    #[arg(short = 'F', long, default_value = "database/factories/model_factories.rs")]
    filename: PathBuf,
    /// Directory scanned for model definitions (repeatable).
    #[arg(short = 'D', long = "dir", value_name = "DIR", default_value = "app")]
    dir: Vec<PathBuf>,
    /// Discard the existing factory file instead of appending.
    #[arg(short = 'R', long)]
    reset: bool,
    /// Which models to ignore, comma-separated.
    #[arg(short = 'I', long, default_value = "")]
    ignore: String,
    /// Schema snapshot consulted for table columns.
    #[arg(long, default_value = "schema.json")]
    schema: PathBuf,
    /// Root against which directories and files are resolved.
    #[arg(long, default_value = ".")]
    project_root: PathBuf,
    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => {
            logging::init(args.verbose);
            if let Err(err) = run_generate(args) {
                error!(error = %err, "generation failed");
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let config = ProjectConfig::load(&args.project_root)?;
    let snapshot = load_snapshot(&resolve(&args.project_root, &args.schema))?;

    let mut registry = ModelRegistry::new();
    registry.scan_dirs(&args.project_root, &args.dir);

    let models = discover(&args.model, &registry);
    info!(candidates = models.len(), "models discovered");

    let filename = resolve(&args.project_root, &args.filename);
    let existing = output::read_existing(&filename)?;

    let mut introspector = SnapshotIntrospector::new(snapshot);
    let renderer = RustRenderer::new();
    let mut generator = Generator::new(&registry, &mut introspector, &renderer, &config);
    let document = generator.run(&models, &args.ignore, &existing, args.reset);

    match output::write_bytes_atomic(&filename, document.as_bytes()) {
        Ok(()) => {
            println!("Model factories were written to {}", filename.display());
        }
        Err(err) => {
            eprintln!(
                "Failed to write model factories to {}: {err}",
                filename.display()
            );
        }
    }

    Ok(())
}

fn resolve(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
