// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use doc_dedup::{
    format_hms, Config, DocumentScanner, DuplicateClassifier, NotFoundLog, ProgressTracker,
    RecordSource, ResumeJournal, XlsxReporter,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "doc_dedup")]
#[command(version = "0.1.0")]
#[command(about = "Content-hash duplicate scanner for stored HTML document records", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan all records, fingerprint their files, and write the duplicate report
    Scan {
        /// Rehash paths already present in the resume journal
        #[arg(long)]
        fresh: bool,

        /// Cap the number of records taken from the source
        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// Check connectivity to the record source
    Verify,

    /// Show collection and journal counts
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    doc_dedup::utils::logging::init_logger(cli.color, cli.verbose);

    info!("doc_dedup duplicate scanner");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Scan { fresh, limit } => {
            cmd_scan(&config, fresh, limit, cli.color).await?;
        }
        Commands::Verify => {
            cmd_verify(&config).await?;
        }
        Commands::Stats => {
            cmd_stats(&config).await?;
        }
    }

    Ok(())
}

async fn cmd_scan(config: &Config, fresh: bool, limit: Option<usize>, color: bool) -> Result<()> {
    info!(
        "Starting duplicate scan at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let start_time = Instant::now();

    let source = RecordSource::new(config.database.clone())
        .context("Failed to create record source client")?;

    if !source.ping().await? {
        error!("Cannot connect to record source");
        return Err(anyhow::anyhow!("Database connection failed"));
    }

    let records = source.fetch_all().await.context("Failed to fetch records")?;

    let records = if let Some(limit) = limit {
        records.into_iter().take(limit).collect()
    } else {
        records
    };

    if records.is_empty() {
        warn!("No records found in the source collection");
    }

    let progress = Arc::new(ProgressTracker::with_color(records.len(), color));

    let mut scanner = DocumentScanner::new(&config.scan);
    if fresh {
        info!("Resume journal ignored for this run");
        scanner = scanner.ignore_resume();
    }

    let hash_start = Instant::now();
    let outcome = {
        let progress = Arc::clone(&progress);
        tokio::task::spawn_blocking(move || scanner.scan(&records, &progress))
            .await
            .context("Scan task failed")??
    };
    progress.finish();
    let hash_elapsed = hash_start.elapsed();

    info!("Hashing finished in {}", format_hms(hash_elapsed));
    info!("Number of distinct hashes: {}", outcome.distinct_digests());

    let classify_start = Instant::now();
    let duplicate_digests = outcome.duplicate_digests();
    let report = DuplicateClassifier::new().classify(outcome.groups);
    let classify_elapsed = classify_start.elapsed();

    info!("Classification finished in {}", format_hms(classify_elapsed));
    info!("Number of duplicate hashes: {}", duplicate_digests);

    if report.is_empty() {
        info!("No duplicates found");
    }

    let reporter = XlsxReporter::new(config.scan.report_path.clone());
    let written = reporter.write(&report).context("Failed to write report")?;

    let stats = outcome.stats;
    info!("=== Scan Summary ===");
    info!("Records hashed: {}", stats.records_hashed);
    info!("Records skipped (resume journal): {}", stats.records_skipped);
    info!("Records not found: {}", stats.records_missing);
    info!("Bytes processed: {}", stats.total_bytes_processed);
    info!("Multiple-copy rows: {}", report.multiples.len());
    info!("Paired-copy rows: {}", report.singles.len());
    info!("Report written to: {}", written.display());
    info!("Total execution time: {}", format_hms(start_time.elapsed()));
    info!("====================");

    Ok(())
}

async fn cmd_verify(config: &Config) -> Result<()> {
    info!("Verifying record source connection");

    let source = RecordSource::new(config.database.clone())
        .context("Failed to create record source client")?;

    if !source.ping().await? {
        error!("Cannot connect to record source");
        return Err(anyhow::anyhow!("Database connection failed"));
    }

    let count = source.count_documents().await?;
    info!(
        "Connected to {}.{} ({} records)",
        config.database.database, config.database.collection, count
    );

    Ok(())
}

async fn cmd_stats(config: &Config) -> Result<()> {
    info!("Gathering statistics");

    let source = RecordSource::new(config.database.clone())
        .context("Failed to create record source client")?;

    if source.ping().await.is_ok() {
        let count = source.count_documents().await?;
        info!("Records in collection: {}", count);
    } else {
        warn!("Record source unreachable, showing journal counts only");
    }

    let resume_entries = ResumeJournal::new(config.scan.resume_path.clone()).load()?;
    info!("Resume journal entries: {}", resume_entries.len());

    let not_found = NotFoundLog::new(config.scan.not_found_path.clone()).count()?;
    info!("Not-found log entries: {}", not_found);

    Ok(())
}
