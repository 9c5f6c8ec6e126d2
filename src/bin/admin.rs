//! CLI administration tool for url-shortener.
//!
//! Manages links and inspects the database without going through the HTTP
//! API. Reads the same environment (and `.env`) as the server.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- link list
//!
//! # Create a link, optionally with a custom code
//! cargo run --bin admin -- link create https://example.com --code docs
//!
//! # Delete a link (asks for confirmation unless --yes)
//! cargo run --bin admin -- link delete docs
//!
//! # Overwrite a visit counter
//! cargo run --bin admin -- link set-visits docs 0
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
//! - `DATABASE_URL`: SQLite URL (default: `sqlite://data/local.sqlite`)
//! - `CODE_LENGTH`: length of generated codes (default: 6)
//! - `BASE_URL`, `PORT`, `IS_DEV`: used to print full short URLs

use url_shortener::application::services::LinkService;
use url_shortener::config::{self, Config};
use url_shortener::infrastructure::persistence::{self, SqliteLinkRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing url-shortener.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links with visit counts
    List,

    /// Create a new short link
    Create {
        /// Destination URL (prompted if omitted)
        url: Option<String>,

        /// Custom short code (generated if not provided)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a short link
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Overwrite the visit counter of a link
    SetVisits {
        /// Short code
        code: String,

        /// New visit count
        #[arg(value_parser = clap::value_parser!(i64).range(0..))]
        count: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

type Service = LinkService<SqliteLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let pool = persistence::connect(&config.database_url, 1)
        .await
        .with_context(|| format!("Failed to open {}", config.database_url))?;

    match cli.command {
        Commands::Link { action } => {
            let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
            let service = LinkService::new(repo, config.code_length);
            handle_link_action(action, &service, &config.site_url()).await?;
        }
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &Service, site_url: &str) -> Result<()> {
    match action {
        LinkAction::List => list_links(service, site_url).await,
        LinkAction::Create { url, code } => create_link(service, site_url, url, code).await,
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await,
        LinkAction::SetVisits { code, count } => set_visits(service, &code, count).await,
    }
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 🔗 Short Links
///
///   ID   Code         Visits   Destination
///   ──────────────────────────────────────────────────────────────
///   1    docs         12       https://example.com/docs
/// ```
async fn list_links(service: &Service, site_url: &str) -> Result<()> {
    println!("{}", "🔗 Short Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin link create <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<12} {:<8} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Visits".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<4} {:<12} {:<8} {}",
            link.id.to_string().bright_black(),
            link.short_code.cyan(),
            link.times_accessed.to_string().bright_green(),
            link.long_url
        );
    }

    println!();
    println!(
        "  Total: {}  (served under {})",
        links.len().to_string().bright_white().bold(),
        site_url.bright_black()
    );
    println!();

    Ok(())
}

/// Creates a link, prompting for the URL when it was not given.
async fn create_link(
    service: &Service,
    site_url: &str,
    url: Option<String>,
    code: Option<String>,
) -> Result<()> {
    println!("{}", "✨ Create Short Link".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Destination URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let link = service
        .create_link(url.trim(), code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  Code:        {}", link.short_code.cyan());
    println!("  Short URL:   {}", link.short_url(site_url).bright_yellow().bold());
    println!("  Destination: {}", link.long_url);
    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();

    let link = service
        .get_link_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", e, code))?;

    println!("  Code:        {}", link.short_code.cyan());
    println!("  Destination: {}", link.long_url);
    println!("  Visits:      {}", link.times_accessed);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Overwrites a visit counter.
async fn set_visits(service: &Service, code: &str, count: i64) -> Result<()> {
    let link = service
        .set_visit_count(code, count)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", e, code))?;

    println!(
        "{} {} now has {} visits",
        "✅".green(),
        link.short_code.cyan(),
        link.times_accessed.to_string().bright_green().bold()
    );

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of links
/// - Total number of visits across all links
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (links_count, visits_count): (i64, i64) =
        sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(times_accessed), 0) FROM links")
            .fetch_one(pool)
            .await?;

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Visits: {}",
        visits_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  Database: {}", config.database_url.bright_white());
            println!("  SQLite:   {}", version.bright_white());
            println!("  Links:    {}", links_count.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
