// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Frontdesk - a virtual receptionist for small businesses.
//!
//! Binary entry point: runs the notification scheduler, checks deployment
//! readiness, and manages the FAQ knowledge base.

use clap::{Parser, Subcommand};
use frontdesk_config::FrontdeskConfig;
use frontdesk_scheduler::NotificationScheduler;
use frontdesk_storage::{queries, Database};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Frontdesk - a virtual receptionist for small businesses.
#[derive(Parser, Debug)]
#[command(name = "frontdesk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the background notification scheduler until interrupted.
    Serve,
    /// Report config, database, and messaging readiness.
    Doctor,
    /// Manage the FAQ knowledge base.
    Faq {
        #[command(subcommand)]
        command: FaqCommands,
    },
}

#[derive(Subcommand, Debug)]
enum FaqCommands {
    /// Add a question/answer pair.
    Add {
        question: String,
        answer: String,
        /// Optional grouping label shown in listings.
        #[arg(long)]
        category: Option<String>,
    },
    /// List all entries.
    List,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match frontdesk_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            eprintln!("frontdesk: configuration problems:");
            eprintln!("{}", frontdesk_config::render_errors(&errors));
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    let result = match cli.command {
        Commands::Serve => serve(&config).await,
        Commands::Doctor => doctor(&config).await,
        Commands::Faq { command } => faq(&config, command).await,
    };

    if let Err(err) = result {
        eprintln!("frontdesk: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(config: &FrontdeskConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.agent.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn serve(config: &FrontdeskConfig) -> Result<(), frontdesk_core::FrontdeskError> {
    info!(agent = %config.agent.name, "starting frontdesk");
    let db = Database::open(&config.storage.database_path).await?;
    let messenger = frontdesk_sms::messenger_from_config(&config.sms);

    let scheduler = NotificationScheduler::new(
        db.clone(),
        messenger,
        config.scheduler.clone(),
        config.sms.review_link.clone(),
    );
    scheduler.start().await;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| frontdesk_core::FrontdeskError::Internal(format!("signal wait failed: {e}")))?;
    info!("shutdown requested");

    scheduler.stop().await;
    db.close().await?;
    info!("frontdesk stopped");
    Ok(())
}

async fn doctor(config: &FrontdeskConfig) -> Result<(), frontdesk_core::FrontdeskError> {
    println!("agent name       : {}", config.agent.name);
    println!("database path    : {}", config.storage.database_path);

    match Database::open(&config.storage.database_path).await {
        Ok(db) => {
            println!("database         : ok");
            let entries = queries::faq::list_faq_entries(&db).await?;
            println!("faq entries      : {}", entries.len());
            db.close().await?;
        }
        Err(err) => println!("database         : FAILED ({err})"),
    }

    if config.sms.is_configured() {
        println!("sms              : configured");
    } else {
        println!("sms              : not configured (outbound texts are dropped)");
    }
    match &config.sms.owner_phone {
        Some(owner) => println!("owner phone      : {owner}"),
        None => println!("owner phone      : not set (transfer alerts are skipped)"),
    }
    println!(
        "business hours   : {:02}:00 - {:02}:00, {}-minute slots",
        config.calendar.open_hour, config.calendar.close_hour, config.calendar.slot_minutes
    );
    Ok(())
}

async fn faq(
    config: &FrontdeskConfig,
    command: FaqCommands,
) -> Result<(), frontdesk_core::FrontdeskError> {
    let db = Database::open(&config.storage.database_path).await?;
    match command {
        FaqCommands::Add {
            question,
            answer,
            category,
        } => {
            let entry =
                queries::faq::insert_faq_entry(&db, &question, &answer, category.as_deref())
                    .await?;
            println!("added faq entry {}", entry.id);
        }
        FaqCommands::List => {
            let entries = queries::faq::list_faq_entries(&db).await?;
            if entries.is_empty() {
                println!("no faq entries");
            }
            for entry in entries {
                match &entry.category {
                    Some(category) => println!("[{}] ({category})", entry.id),
                    None => println!("[{}]", entry.id),
                }
                println!("  Q: {}", entry.question);
                println!("  A: {}", entry.answer);
            }
        }
    }
    db.close().await?;
    Ok(())
}
