//! wortschatz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::SourceArgs;

#[derive(Parser)]
#[command(
    name = "wortschatz",
    version,
    about = "German/Czech vocabulary trainer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the lessons of the loaded database
    Lessons {
        /// Lessons to mark as selected: comma-separated numbers or "all"
        #[arg(long)]
        lessons: Option<String>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List the pages offered for a lesson selection
    Pages {
        /// Lessons to select: comma-separated numbers or "all"
        #[arg(long)]
        lessons: Option<String>,

        /// Pages to keep selected (e.g. "2-1,2-3"); default: all
        #[arg(long)]
        pages: Option<String>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the words of the selected lessons and pages
    Words {
        /// Lessons to select: comma-separated numbers or "all"
        #[arg(long)]
        lessons: Option<String>,

        /// Pages to keep (e.g. "2-1,2-3"); default: every page of the selected lessons
        #[arg(long)]
        pages: Option<String>,

        /// Prompt in Czech, answer in German
        #[arg(long)]
        reverse: bool,

        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Validate database JSON files
    Validate {
        /// Database file(s) to check
        #[arg(long = "file", required = true)]
        files: Vec<PathBuf>,
    },

    /// Create starter config and sample database
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wortschatz=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lessons { lessons, source } => commands::lessons::execute(lessons, source).await,
        Commands::Pages {
            lessons,
            pages,
            source,
        } => commands::pages::execute(lessons, pages, source).await,
        Commands::Words {
            lessons,
            pages,
            reverse,
            format,
            output,
            source,
        } => commands::words::execute(lessons, pages, reverse, format, output, source).await,
        Commands::Validate { files } => commands::validate::execute(files),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
