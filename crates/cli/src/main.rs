//! Mangal Chai CLI - Database migrations and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending migrations
//! chai-cli migrate
//!
//! # Seed the catalog (no-op unless the products collection is empty)
//! chai-cli seed
//! ```
//!
//! Both commands read the same environment as the API server
//! (`CHAI_DATABASE_URL`, falling back to `DATABASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "chai-cli")]
#[command(author, version, about = "Mangal Chai CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Insert the house teas if the catalog is empty
    Seed {
        /// Apply pending migrations before seeding
        #[arg(long)]
        migrate: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { migrate } => {
            if migrate {
                commands::migrate::run().await?;
            }
            commands::seed::run().await?;
        }
    }
    Ok(())
}
