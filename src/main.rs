use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use fintrix::cli::{
    handle_ask_command, handle_chat_command, handle_dashboard_command, handle_date_command,
    handle_icon_command, handle_portfolio_command, handle_report_command, handle_wallet_command,
    OutputArgs, PortfolioArgs, ReportCommands,
};
use fintrix::config::{FintrixPaths, Settings};
use fintrix::store::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "fintrix",
    version,
    about = "Terminal personal-finance dashboard",
    long_about = "Fintrix summarises your expenses by category and month, shows recent \
                  transactions and crypto holdings, and answers questions through a \
                  webhook-backed finance assistant."
)]
struct Cli {
    /// Expense data file (JSON or CSV); the built-in sample data is used when omitted
    #[arg(long, global = true, env = "FINTRIX_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full expense dashboard
    #[command(alias = "dash")]
    Dashboard {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Expense reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show the icon for a category
    Icon {
        category: String,
    },

    /// Show a YYYY-MM-DD date in display form
    Date {
        date: String,
    },

    /// Show crypto holdings
    Portfolio(PortfolioArgs),

    /// Ask the finance assistant a question
    Ask {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Chat with the finance assistant interactively
    Chat,

    /// Show the crypto wallet summary
    Wallet {
        /// Keep refreshing until interrupted
        #[arg(short, long)]
        watch: bool,

        /// Refresh interval in seconds for --watch
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("fintrix=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_store(data: Option<&Path>) -> Result<ExpenseStore> {
    let store = match data {
        Some(path) => ExpenseStore::from_file(path)?,
        None => ExpenseStore::seed(),
    };
    if store.is_mixed_currency() {
        warn!(
            currencies = ?store.currencies(),
            "records use more than one currency; totals add amounts as-is"
        );
    }
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrixPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings.log_level);

    match cli.command {
        Some(Commands::Dashboard { limit, today, out }) => {
            let store = load_store(cli.data.as_deref())?;
            handle_dashboard_command(&store, &settings, &paths, limit, today, out)?;
        }
        Some(Commands::Report(cmd)) => {
            let store = load_store(cli.data.as_deref())?;
            handle_report_command(&store, &settings, &paths, cmd)?;
        }
        Some(Commands::Icon { category }) => handle_icon_command(&category),
        Some(Commands::Date { date }) => handle_date_command(&date)?,
        Some(Commands::Portfolio(args)) => handle_portfolio_command(&settings, args)?,
        Some(Commands::Ask { message }) => handle_ask_command(&settings, message).await?,
        Some(Commands::Chat) => handle_chat_command(&settings).await?,
        Some(Commands::Wallet { watch, interval }) => {
            handle_wallet_command(&settings, watch, interval).await?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Fintrix Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Assistant URL:    {}", settings.assistant_url);
            println!("  Wallet URL:       {}", settings.wallet_url);
            println!("  Request timeout:  {}s", settings.request_timeout().as_secs());
            println!("  Wallet refresh:   {}s", settings.wallet_refresh().as_secs());
            println!("  Client tag:       {}", settings.client_tag);
            println!("  Log level:        {}", settings.log_level);
        }
        None => {
            println!("Fintrix - Terminal personal-finance dashboard");
            println!();
            println!("Run 'fintrix --help' for usage information.");
            println!("Run 'fintrix dashboard' to see your spending.");
        }
    }

    Ok(())
}
