//! CLI administration tool for housing-dashboard.
//!
//! Provides commands for managing access tokens and performing database
//! operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new access token
//! cargo run --bin admin -- token create
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Ops dashboard"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show table counts
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for token commands): HMAC key, must
//!   match the server's

use housing_dashboard::application::services::AuthService;
use housing_dashboard::domain::repositories::TokenRepository;
use housing_dashboard::infrastructure::persistence::PgTokenRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::env;
use std::sync::Arc;

/// CLI tool for managing housing-dashboard.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage access tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new access token
    Create {
        /// Token name (e.g., "Ops dashboard", "CI export")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name to revoke
        name: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show table counts
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => {
            let secret = env::var("TOKEN_SIGNING_SECRET")
                .context("TOKEN_SIGNING_SECRET must be set for token commands")?;
            let repository = Arc::new(PgTokenRepository::new(Arc::new(pool)));
            let auth_service = AuthService::new(repository.clone(), secret);

            match action {
                TokenAction::Create { name, token, yes } => {
                    create_token(&auth_service, name, token, yes).await?;
                }
                TokenAction::List => list_tokens(repository.as_ref()).await?,
                TokenAction::Revoke { name } => revoke_token(repository.as_ref(), &name).await?,
            }
        }
        Commands::Db { action } => match action {
            DbAction::Check => db_check(&pool).await?,
            DbAction::Info => db_info(&pool).await?,
        },
    }

    Ok(())
}

async fn create_token(
    auth_service: &AuthService,
    name: Option<String>,
    token: Option<String>,
    yes: bool,
) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Token name")
            .interact_text()
            .context("Failed to read token name")?,
    };

    if !yes {
        let proceed = Confirm::new()
            .with_prompt(format!("Create token '{name}'?"))
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;

        if !proceed {
            println!("{}", "Aborted".yellow());
            return Ok(());
        }
    }

    let (record, raw) = auth_service.create_token(&name, token).await?;

    println!("{} token '{}' (id {})", "Created".green(), record.name, record.id);
    println!();
    println!("  {raw}");
    println!();
    println!(
        "{}",
        "Store this value now; only its hash is kept in the database.".yellow()
    );

    Ok(())
}

async fn list_tokens(repository: &PgTokenRepository) -> Result<()> {
    let tokens = repository.list_tokens().await?;

    if tokens.is_empty() {
        println!("{}", "No tokens found".yellow());
        return Ok(());
    }

    for token in tokens {
        let status = if token.is_revoked() {
            "revoked".red()
        } else {
            "active".green()
        };

        let last_used = token
            .last_used_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "{:<24} {} created {} last used {}",
            token.name.bold(),
            status,
            token.created_at.to_rfc3339(),
            last_used
        );
    }

    Ok(())
}

async fn revoke_token(repository: &PgTokenRepository, name: &str) -> Result<()> {
    let proceed = Confirm::new()
        .with_prompt(format!("Revoke token '{name}'?"))
        .default(false)
        .interact()
        .context("Failed to read confirmation")?;

    if !proceed {
        println!("{}", "Aborted".yellow());
        return Ok(());
    }

    if repository.revoke_token(name).await? {
        println!("{} token '{name}'", "Revoked".green());
    } else {
        println!("{} no active token named '{name}'", "Not found:".red());
    }

    Ok(())
}

async fn db_check(pool: &PgPool) -> Result<()> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .context("Database check query failed")?;

    println!("{}", "Database connection OK".green());
    Ok(())
}

async fn db_info(pool: &PgPool) -> Result<()> {
    let listings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM house_listings")
        .fetch_one(pool)
        .await?;
    let instruments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM instruments")
        .fetch_one(pool)
        .await?;
    let tokens: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dashboard_tokens")
        .fetch_one(pool)
        .await?;

    println!("house_listings:   {listings}");
    println!("instruments:      {instruments}");
    println!("dashboard_tokens: {tokens}");

    Ok(())
}
