//! ComXStore CLI - inspect the demo store from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Catalog, optionally filtered and sorted
//! comx-cli catalog --category 2 --search pads --sort price --desc
//!
//! # Orders under one status tab
//! comx-cli orders --status PAID
//!
//! # Dashboard headline numbers
//! comx-cli dashboard
//!
//! # Price a cart
//! comx-cli cart quote p1:1 p2:2
//!
//! # Show or change persisted preferences
//! comx-cli prefs show
//! comx-cli prefs role admin
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "comx-cli")]
#[command(author, version, about = "ComXStore CLI tools")]
struct Cli {
    /// Emit JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products from the seeded catalog
    Catalog {
        /// Category id, or `all`
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort column (`name`, `category`, `price`, `stock`)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },
    /// List orders
    Orders {
        /// `ALL` or one status (`PENDING`, `PAID`, `SHIPPED`, `DELIVERED`)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show the admin dashboard summary
    Dashboard,
    /// Cart tools
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Persisted role and theme
    Prefs {
        /// Preference file (defaults to `COMXSTORE_PREFERENCES_PATH`)
        #[arg(long)]
        path: Option<PathBuf>,

        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Price cart lines given as `product_id:quantity`
    Quote {
        #[arg(required = true)]
        lines: Vec<String>,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print the current preferences
    Show,
    /// Sign in as `admin` or `customer`, or `none` to sign out
    Role { role: String },
    /// Set the theme (`light` or `dark`)
    Theme { theme: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comxstore_cli=info,comxstore_server=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let json = cli.json;
    match cli.command {
        Commands::Catalog {
            category,
            search,
            sort,
            desc,
        } => commands::catalog::list(category.as_deref(), &search, sort.as_deref(), desc, json)?,
        Commands::Orders { status } => commands::orders::list(status.as_deref(), json)?,
        Commands::Dashboard => commands::orders::dashboard(json)?,
        Commands::Cart { action } => match action {
            CartAction::Quote { lines } => commands::cart::quote(&lines, json)?,
        },
        Commands::Prefs { path, action } => {
            let path = path.unwrap_or_else(commands::prefs::default_path);
            match action {
                PrefsAction::Show => commands::prefs::show(path, json).await?,
                PrefsAction::Role { role } => commands::prefs::set_role(path, &role, json).await?,
                PrefsAction::Theme { theme } => {
                    commands::prefs::set_theme(path, &theme, json).await?;
                }
            }
        }
    }
    Ok(())
}
