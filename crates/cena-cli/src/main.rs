use std::path::PathBuf;

use anyhow::Context;
use cena_core::app::{Tracker, TrackerBuilder};
use cena_core::config::{CenaConfig, Locale};
use cena_core::domain::{ActivityClass, ProteinLevel, Quality};
use cena_core::ports::HistorySource;
use cena_core::stats::RoundingMode;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod source;

use source::JsonFileHistory;

#[derive(Debug, Parser)]
#[command(name = "cena", version, about = "Does tonight's dinner move you toward your goal?")]
struct Cli {
    /// Label language (es | en). Defaults to CENA_LOCALE, then es.
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Percentage rounding (half-up | half-even). Defaults to CENA_ROUNDING, then half-up.
    #[arg(long, global = true)]
    rounding: Option<RoundingMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verdict for a single dinner.
    Classify {
        #[arg(long)]
        day: ActivityClass,
        #[arg(long)]
        protein: ProteinLevel,
        #[arg(long)]
        quality: Quality,
    },

    /// Every record in a history file with its verdict.
    History {
        /// JSON history feed, or `-` for stdin.
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },

    /// Compliance percentage and current streak.
    Stats {
        /// JSON history feed, or `-` for stdin.
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

/// Logs go to stderr so stdout only carries results.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn tracker<S: HistorySource>(source: S, cli: &Cli, config: CenaConfig) -> anyhow::Result<Tracker<S>> {
    let mut builder = TrackerBuilder::new().source(source).config(config);
    if let Some(locale) = cli.locale {
        builder = builder.locale(locale);
    }
    if let Some(rounding) = cli.rounding {
        builder = builder.rounding(rounding);
    }
    Ok(builder.build()?)
}

async fn run(cli: &Cli, config: CenaConfig) -> anyhow::Result<()> {
    match &cli.command {
        Command::Classify {
            day,
            protein,
            quality,
        } => {
            let locale = cli.locale.unwrap_or(config.locale);
            let verdict = cena_core::classify(*day, *protein, *quality);
            println!("{}", verdict.label(locale));
        }

        Command::History { file, json } => {
            let tracker = tracker(JsonFileHistory::new(file), cli, config)?;
            let history = tracker
                .history()
                .await
                .with_context(|| format!("loading history from {}", file.display()))?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&history)?);
            } else if history.is_empty() {
                println!("no records");
            } else {
                let locale = tracker.config().locale;
                for view in &history {
                    let r = &view.record;
                    let (activity, protein, quality) = match locale {
                        Locale::Es => (r.activity.as_str(), r.protein.as_str(), r.quality.as_str()),
                        Locale::En => (r.activity.english(), r.protein.english(), r.quality.english()),
                    };
                    println!(
                        "{}  {activity:<14}  protein={protein:<6}  quality={quality:<10}  {}",
                        r.date,
                        view.label(locale)
                    );
                }
            }
        }

        Command::Stats { file, json } => {
            let tracker = tracker(JsonFileHistory::new(file), cli, config)?;
            let stats = tracker
                .stats()
                .await
                .with_context(|| format!("loading history from {}", file.display()))?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                let approaches = cena_core::Verdict::Approaches.label(tracker.config().locale);
                println!("{approaches}: {}%", stats.compliance_percentage);
                println!("streak: {}", stats.current_streak);
                println!(
                    "records: {} ({} / {} / {})",
                    stats.total(),
                    stats.counts.approaches,
                    stats.counts.maintains,
                    stats.counts.hinders
                );
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = CenaConfig::from_env().context("reading configuration from environment")?;

    if let Err(e) = run(&cli, config).await {
        tracing::error!(error = %e, "command failed");
        return Err(e);
    }
    Ok(())
}
