use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use verdiff::config::RenderConfig;
use verdiff::run::{self, Rendered};

#[derive(Parser)]
#[command(name = "verdiff")]
#[command(version, about = "Render version-range views of annotated HTML documents")]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Restyle a document for the selected version range
    Render {
        /// Annotated HTML document
        file: PathBuf,

        /// Restore the selection from a query string (`v=…&base=…`);
        /// suppresses publishing the canonical query
        #[arg(long)]
        query: Option<String>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show what changed going into a version
    Diff {
        /// Annotated HTML document
        file: PathBuf,

        /// Target version, dot or hyphen form
        #[arg(long)]
        version: String,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = cli
        .config
        .as_deref()
        .map(RenderConfig::load)
        .transpose()?
        .unwrap_or_default();

    match cli.command {
        Command::Render {
            file,
            query,
            output,
        } => {
            let source = read_document(&file)?;
            let rendered = run::render(&source, query.as_deref(), &config)?;
            emit(&rendered, output.as_deref())
        }
        Command::Diff {
            file,
            version,
            output,
        } => {
            let source = read_document(&file)?;
            let rendered = run::diff(&source, &version, &config)?;
            emit(&rendered, output.as_deref())
        }
    }
}

fn read_document(path: &std::path::Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn emit(rendered: &Rendered, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    // The history-push analogue: the canonical query goes to stderr so it
    // never mixes with document output.
    if let Some(query) = &rendered.query {
        eprintln!("?{query}");
    }
    match output {
        Some(path) => fs::write(path, &rendered.html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.html.as_bytes())?;
        }
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
