/// scss-refactor: line-based SCSS refactoring from the command line.
///
/// Commands:
/// - extract: turn the selected literal into a named variable
/// - format: align the value column of consecutive variable declarations
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scss_refactor::prompt::{AutoNameResolver, NameResolver, StdinNameResolver};
use scss_refactor::tools::{ExtractVariableTool, FormatVariablesTool};

#[derive(Parser)]
#[command(name = "scss-refactor")]
#[command(about = "Line-based SCSS refactoring: extract variables, align declarations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the selected literal into a variable
    Extract {
        /// SCSS file to refactor
        #[arg(short, long)]
        file: PathBuf,

        /// Selection start line (1-based)
        #[arg(long)]
        start_line: u32,

        /// Selection start column (1-based)
        #[arg(long)]
        start_column: u32,

        /// Selection end line (1-based)
        #[arg(long)]
        end_line: u32,

        /// Selection end column (1-based, exclusive)
        #[arg(long)]
        end_column: u32,

        /// Variable name to use, skipping the prompt
        #[arg(short, long)]
        name: Option<String>,

        /// Prompt for the name on the terminal
        #[arg(short, long)]
        interactive: bool,

        /// Preview changes without applying
        #[arg(long)]
        dry_run: bool,

        /// Optional log file path for debug logging
        #[arg(short, long)]
        log: Option<PathBuf>,
    },

    /// Align the value column of consecutive variable declarations
    Format {
        /// SCSS file to format
        #[arg(short, long)]
        file: PathBuf,

        /// First line of the region to format (1-based; whole file if omitted)
        #[arg(long)]
        start_line: Option<u32>,

        /// Last line of the region to format (1-based, inclusive)
        #[arg(long)]
        end_line: Option<u32>,

        /// Preview changes without applying
        #[arg(long)]
        dry_run: bool,

        /// Optional log file path for debug logging
        #[arg(short, long)]
        log: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = match &cli.command {
        Commands::Extract { log, .. } => log.clone(),
        Commands::Format { log, .. } => log.clone(),
    };
    init_logging(log_path.as_ref())?;

    let result = match cli.command {
        Commands::Extract {
            file,
            start_line,
            start_column,
            end_line,
            end_column,
            name,
            interactive,
            dry_run,
            log: _,
        } => {
            let resolver: Box<dyn NameResolver> = match (name, interactive) {
                (Some(name), _) => Box::new(AutoNameResolver::with_preset(name)),
                (None, true) => Box::new(StdinNameResolver),
                (None, false) => Box::new(AutoNameResolver::default()),
            };
            let tool = ExtractVariableTool {
                file_path: file.to_string_lossy().to_string(),
                start_line,
                start_column,
                end_line,
                end_column,
                dry_run,
            };
            tool.run(resolver.as_ref())?
        }
        Commands::Format {
            file,
            start_line,
            end_line,
            dry_run,
            log: _,
        } => {
            let tool = FormatVariablesTool {
                file_path: file.to_string_lossy().to_string(),
                start_line,
                end_line,
                dry_run,
            };
            tool.run()?
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Initialize logging with optional file output
fn init_logging(log_path: Option<&PathBuf>) -> Result<()> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    if let Some(log_file) = log_path {
        // With log file: info+ to file, warn+ to stderr
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        let file_appender = tracing_appender::rolling::never(
            log_file
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("scss-refactor.log"),
        );

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender.and(std::io::stderr.with_max_level(tracing::Level::WARN)))
            .with_ansi(false)
            .init();
    } else {
        // No log file: warn+ to stderr only (unless RUST_LOG overrides)
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
