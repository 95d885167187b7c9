//! CLI administration tool for shortlink.
//!
//! Works directly against the PostgreSQL mapping store, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (idempotent, same allocator as the API)
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Look up a code
//! cargo run --bin admin -- resolve aB3dEf
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; `DATABASE_URL` (or `DB_*` components) is required.

use shortlink::api::dto::shorten::ShortenRequest;
use shortlink::application::services::ShortenerService;
use shortlink::config::Config;
use shortlink::domain::repositories::MappingRepository;
use shortlink::infrastructure::persistence::PgMappingRepository;
use shortlink::server::connect_pool;
use shortlink::utils::code_generator::is_well_formed_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// Absolute http(s) URL
        url: String,
    },

    /// Resolve a short code to its URL
    Resolve {
        /// Short code to look up
        code: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;
    if !config.is_persistent() {
        anyhow::bail!("DATABASE_URL (or DB_NAME and friends) must be set for admin commands");
    }
    let database_url = config.database_url.as_deref().unwrap_or_default();

    let pool = connect_pool(database_url, &config).await?;

    match cli.command {
        Commands::Shorten { url } => handle_shorten(&pool, &config, url).await?,
        Commands::Resolve { code } => handle_resolve(&pool, &config, &code).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn shortener(pool: &PgPool, config: &Config) -> ShortenerService<PgMappingRepository> {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));

    ShortenerService::new(repository, config.base_url.clone())
        .with_max_attempts(config.code_max_attempts)
}

/// Shortens a URL through the same allocator the API uses.
async fn handle_shorten(pool: &PgPool, config: &Config, url: String) -> Result<()> {
    let request = ShortenRequest { url };
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid URL: {}", e))?;

    let service = shortener(pool, config);
    let mapping = service
        .shorten(&request.url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Shortened".green().bold());
    println!();
    println!("  URL:       {}", mapping.original_url.cyan());
    println!("  Code:      {}", mapping.short_code.bright_yellow().bold());
    println!("  Short URL: {}", service.short_url(&mapping.short_code).bright_white());
    println!(
        "  Created:   {}",
        mapping
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Looks up a short code.
async fn handle_resolve(pool: &PgPool, config: &Config, code: &str) -> Result<()> {
    if !is_well_formed_code(code) {
        println!(
            "{}",
            "⚠️  Code does not look like a generated code, looking it up anyway".yellow()
        );
    }

    let mapping = shortener(pool, config)
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match mapping {
        Some(mapping) => {
            println!("  {} → {}", code.bright_yellow().bold(), mapping.original_url.cyan());
            println!("  ID:      {}", mapping.id.to_string().bright_black());
            println!(
                "  Created: {}",
                mapping
                    .created_at
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string()
                    .bright_black()
            );
        }
        None => {
            println!("{}", format!("❌ No mapping for '{code}'").red());
        }
    }

    Ok(())
}

/// Displays mapping statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repository = PgMappingRepository::new(Arc::new(pool.clone()));
    let mappings = repository
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let latest: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT MAX(created_at) FROM urls")
            .fetch_one(pool)
            .await?;

    println!(
        "  Mappings:     {}",
        mappings.to_string().bright_green().bold()
    );
    println!(
        "  Last created: {}",
        latest
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string())
            .bright_white()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
