//! SoyCart CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! soycart migrate
//!
//! # Seed the product catalog (built-in lineup or a YAML file)
//! soycart seed products
//! soycart seed products --file catalog.yaml --clear
//!
//! # Create an account (e.g. the reserved admin account)
//! soycart user create -u technoAdmin -c 09171234567 --campus "CET Department"
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed products` - Seed the product catalog
//! - `user create` - Create an account from the terminal

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "soycart")]
#[command(author, version, about = "SoyCart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed database tables
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// Manage accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Seed the product catalog
    Products {
        /// YAML file with catalog entries (defaults to the built-in lineup)
        #[arg(short, long)]
        file: Option<String>,

        /// Remove existing products before seeding
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new account
    Create {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password (min 8 characters)
        #[arg(short, long)]
        password: String,

        /// Contact number (10-13 digits)
        #[arg(short, long)]
        contact: String,

        /// Facebook handle
        #[arg(long)]
        facebook: Option<String>,

        /// Campus department
        #[arg(long)]
        campus: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { target } => match target {
            SeedTarget::Products { file, clear } => {
                commands::seed::products(file.as_deref(), clear).await?;
            }
        },
        Commands::User { action } => match action {
            UserAction::Create {
                username,
                password,
                contact,
                facebook,
                campus,
            } => {
                commands::user::create(&username, &password, &contact, facebook, &campus).await?;
            }
        },
    }
    Ok(())
}
