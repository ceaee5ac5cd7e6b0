use clap::{Parser, Subcommand};
use shufflechars::cli::{
    read_source, run_shuffle, run_unshuffle, show_period, OutputFormat, ShuffleOptions,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("SHUFFLECHARS_VERSION");
const PROFILE: &str = env!("SHUFFLECHARS_PROFILE");
const GIT_HASH: &str = env!("SHUFFLECHARS_GIT_HASH");

/// Environment variable holding the log filter
const LOG_ENV: &str = "SHUFFLECHARS_LOG";

#[derive(Parser)]
#[command(name = "shufflechars")]
#[command(author, about = "Deterministic interleave shuffle of text", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the interleave pass COUNT times
    #[command(alias = "s")]
    Shuffle {
        /// Source text, or `-` to read it from stdin
        text: String,

        /// Number of passes
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,

        /// Apply every pass literally instead of skipping whole periods
        #[arg(long)]
        no_cycle_detection: bool,
    },

    /// Undo COUNT interleave passes
    #[command(alias = "u")]
    Unshuffle {
        /// Shuffled text, or `-` to read it from stdin
        text: String,

        /// Number of passes to undo
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,
    },

    /// Show after how many passes the text comes back
    #[command(alias = "p")]
    Period {
        /// Source text, or `-` to read it from stdin
        text: String,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("shufflechars {} {} ({})", PROFILE, VERSION, GIT_HASH);
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            if Cli::command().print_help().is_err() {
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    init_logging();
    let mut stdin = std::io::stdin();

    let result = match command {
        Commands::Shuffle {
            text,
            count,
            format,
            no_cycle_detection,
        } => {
            let options = ShuffleOptions {
                count,
                format,
                cycle_detection: !no_cycle_detection,
            };
            read_source(&text, &mut stdin).and_then(|source| run_shuffle(&source, &options))
        }

        Commands::Unshuffle { text, count, format } => {
            let options = ShuffleOptions {
                count,
                format,
                ..Default::default()
            };
            read_source(&text, &mut stdin).and_then(|source| run_unshuffle(&source, &options))
        }

        Commands::Period { text } => {
            read_source(&text, &mut stdin).and_then(|source| show_period(&source))
        }
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
