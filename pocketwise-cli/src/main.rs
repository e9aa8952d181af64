//! Pocketwise CLI - rule-based personal finance chat
//!
//! Usage:
//!   pocketwise ask "how much did I spend on food?" --context me.json
//!   pocketwise classify "am I over budget?"
//!   pocketwise chat --context me.json
//!   pocketwise import --csv statement.csv --context me.json
//!   pocketwise config init|show

mod auth;
mod chat;
mod config;
mod state;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use pocketwise_agent::{DisabledGenerator, FinanceAgent, HttpGenerator};
use pocketwise_core::{ContextBundle, classify_with_reason};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "pocketwise", version, about = "Personal finance chat assistant")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer a single message and exit
    Ask {
        message: String,

        /// JSON file with user, transactions, goals and budgets
        #[arg(long)]
        context: Option<PathBuf>,

        /// Extra transactions from a CSV statement
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print the intent a message is classified as
    Classify {
        message: String,

        /// Also print the keyword that matched
        #[arg(long)]
        why: bool,
    },

    /// Interactive chat on stdin/stdout
    Chat {
        #[arg(long)]
        context: Option<PathBuf>,

        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Append transactions from a CSV statement to a context file
    Import {
        #[arg(long)]
        csv: PathBuf,

        /// Context file to update (created if missing)
        #[arg(long)]
        context: PathBuf,
    },

    /// Manage ~/.pocketwise/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    match cli.command {
        Command::Ask {
            message,
            context,
            csv,
        } => {
            let cfg = config::load_config()?;
            let ctx = load_context(context.as_deref(), csv.as_deref(), &cfg)?;
            let agent = build_agent(&cfg)?;
            let reply = agent.respond(&message, &ctx).await;
            println!("{}", reply.text);
        }

        Command::Classify { message, why } => {
            let c = classify_with_reason(&message);
            match (why, c.keyword) {
                (true, Some(kw)) => println!("{} (matched \"{}\")", c.intent, kw),
                (true, None) => println!("{} (no keyword matched)", c.intent),
                (false, _) => println!("{}", c.intent),
            }
        }

        Command::Chat { context, csv } => {
            let cfg = config::load_config()?;
            let ctx = load_context(context.as_deref(), csv.as_deref(), &cfg)?;
            let agent = build_agent(&cfg)?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            chat::run_chat(&agent, &ctx, stdin.lock(), &mut stdout).await?;
        }

        Command::Import { csv, context } => {
            let imported = pocketwise_store::import_transactions_csv(&csv)
                .with_context(|| format!("importing {}", csv.display()))?;
            let mut bundle = if context.exists() {
                pocketwise_store::load_bundle(&context)
                    .with_context(|| format!("loading {}", context.display()))?
            } else {
                ContextBundle::default()
            };
            let added = imported.len();
            bundle.transactions.extend(imported);
            pocketwise_store::save_bundle(&context, &bundle)
                .with_context(|| format!("saving {}", context.display()))?;
            println!(
                "Imported {} transactions into {} ({} total)",
                added,
                context.display(),
                bundle.transactions.len()
            );
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

/// Load, merge and trim the context for one conversation.
fn load_context(context: Option<&Path>, csv: Option<&Path>, cfg: &Config) -> Result<ContextBundle> {
    let mut bundle = match context {
        Some(p) => pocketwise_store::load_bundle(p)
            .with_context(|| format!("loading context {}", p.display()))?,
        None => {
            tracing::info!("No --context given, answering with an empty profile");
            ContextBundle::default()
        }
    };

    if let Some(p) = csv {
        let extra = pocketwise_store::import_transactions_csv(p)
            .with_context(|| format!("importing {}", p.display()))?;
        bundle.transactions.extend(extra);
    }

    let today = Local::now().date_naive();
    Ok(pocketwise_store::select_context(
        &bundle,
        today,
        cfg.chat.recent_transactions,
    ))
}

fn build_agent(cfg: &Config) -> Result<FinanceAgent> {
    let provider = cfg.llm.provider()?;
    let stored = auth::load_auth()?;
    let key = auth::resolve_api_key(provider, |k| std::env::var(k).ok(), &stored);

    let agent = match key {
        Some(key) => FinanceAgent::new(HttpGenerator::new(cfg.llm.to_client_config(key)?)),
        None => {
            tracing::info!(
                %provider,
                "No API key configured; general questions get canned replies"
            );
            FinanceAgent::new(DisabledGenerator)
        }
    };

    Ok(agent
        .with_timeout(cfg.llm.timeout())
        .with_history_pairs(cfg.chat.history_pairs))
}
