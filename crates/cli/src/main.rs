//! Bursary CLI — the main entry point.
//!
//! Commands:
//! - `tutor` — AP/STEM tutoring and academic counseling chat
//! - `find`  — scholarship search with expired-listing screening

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "bursary",
    about = "Bursary — academic tutor and scholarship finder",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose diagnostic logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the tutor + counselor assistant
    Tutor {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// Answer each message without replaying earlier turns
        #[arg(long)]
        no_history: bool,

        /// Override the sampling temperature
        #[arg(long)]
        temperature: Option<f32>,

        /// Print token usage after each reply
        #[arg(long)]
        usage: bool,
    },

    /// Search the web for scholarships with still-open deadlines
    Find {
        /// Send a single query instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// Print token usage after each reply
        #[arg(long)]
        usage: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins; --verbose sets the default level otherwise.
    let fallback = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Tutor {
            message,
            no_history,
            temperature,
            usage,
        } => commands::tutor::run(message, no_history, temperature, usage).await?,
        Commands::Find { message, usage } => commands::find::run(message, usage).await?,
    }

    Ok(())
}
