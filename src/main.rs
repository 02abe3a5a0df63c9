mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventboard_core::config::BoardConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use commands::Context;

#[derive(Parser)]
#[command(name = "eventboard")]
#[command(about = "Browse upcoming events, count down to the next one and propose new ones")]
struct Cli {
    /// Spreadsheet endpoint to use instead of the configured one
    #[arg(long, global = true)]
    endpoint: Option<Url>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of approved events
    List {
        /// Page to show (starts at 1)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Page through events interactively
    Browse,
    /// Show the next upcoming event
    Next,
    /// Count down to the next upcoming event
    Countdown {
        /// Print the remaining time once and exit
        #[arg(long)]
        once: bool,
    },
    /// Propose a new event (missing fields are prompted for)
    Submit {
        #[arg(long)]
        title: Option<String>,

        /// Kind of event, e.g. "Workshop" or "Hackathon"
        #[arg(long = "type")]
        event_type: Option<String>,

        /// Proposed date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Show configuration paths and effective settings
    Config {
        /// Write a commented default config file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Cli { endpoint, command } = Cli::parse();

    match command {
        Commands::List { page } => commands::list::run(&context(endpoint)?, page).await,
        Commands::Browse => commands::browse::run(&context(endpoint)?).await,
        Commands::Next => commands::next::run(&context(endpoint)?).await,
        Commands::Countdown { once } => commands::countdown::run(&context(endpoint)?, once).await,
        Commands::Submit {
            title,
            event_type,
            date,
            description,
        } => {
            let fields = commands::submit::Fields {
                title,
                event_type,
                date,
                description,
            };
            commands::submit::run(&context(endpoint)?, fields).await
        }
        Commands::Config { init } => commands::config::run(init),
    }
}

fn context(endpoint: Option<Url>) -> Result<Context> {
    let mut config = BoardConfig::load()?;
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    Context::new(config)
}
