mod config;
mod fetch;
mod output;
mod parser;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use config::{HallConfig, TargetDay, DINING_HALLS};
use parser::select::Selection;

#[derive(Parser)]
#[command(name = "dining_scraper", about = "St. Thomas dining hall menu scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape every hall's menu page and write one JSON document each
    Run {
        /// Day to keep: a weekday name, "all", or "today"
        #[arg(short, long, default_value = "all")]
        day: String,
        /// Output directory for menu documents
        #[arg(short, long, default_value = "public")]
        out: PathBuf,
        /// Only scrape the named hall
        #[arg(long)]
        hall: Option<String>,
    },
    /// List configured dining halls
    Halls,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { day, out, hall } => run(&day, &out, hall.as_deref()).await,
        Commands::Halls => {
            println!("{:<20} | {:<9} | {}", "Hall", "Brunch", "URL");
            println!("{}", "-".repeat(72));
            for hall in DINING_HALLS {
                let brunch = hall.brunch_day.map(|day| day.name()).unwrap_or("-");
                println!("{:<20} | {:<9} | {}", hall.name, brunch, hall.url);
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

async fn run(day: &str, out: &Path, only: Option<&str>) -> Result<()> {
    let target = TargetDay::parse(day)?;

    let halls: Vec<&'static HallConfig> = DINING_HALLS
        .iter()
        .filter(|hall| only.map_or(true, |name| hall.name.eq_ignore_ascii_case(name)))
        .collect();
    if halls.is_empty() {
        bail!("no hall named {:?} (try the `halls` command)", only.unwrap_or_default());
    }

    println!("Scraping {} halls (day: {})...", halls.len(), target);

    let client = fetch::client()?;
    let mut tasks = Vec::new();
    for hall in halls {
        let client = client.clone();
        let out = out.to_path_buf();
        tasks.push((
            hall.name,
            tokio::spawn(async move { scrape_hall(&client, hall, target, &out).await }),
        ));
    }

    let total = tasks.len();
    let mut ok = 0usize;
    let mut errors = 0usize;
    for (name, task) in tasks {
        match task.await {
            Ok(Ok(path)) => {
                ok += 1;
                println!("{} → {}", name, path.display());
            }
            Ok(Err(e)) => {
                errors += 1;
                warn!("{} failed: {:#}", name, e);
            }
            Err(e) => {
                errors += 1;
                warn!("{} task panicked: {}", name, e);
            }
        }
    }

    println!("Done: {} halls ({} ok, {} errors).", total, ok, errors);
    if ok == 0 {
        bail!("every hall failed");
    }
    Ok(())
}

/// Scrape one hall end to end. A failure here is that hall's alone: the
/// sibling tasks keep going and the failed hall writes nothing.
async fn scrape_hall(
    client: &reqwest::Client,
    hall: &'static HallConfig,
    target: TargetDay,
    out: &Path,
) -> Result<PathBuf> {
    let body = fetch::fetch_page(client, hall.url).await?;
    let selection = Selection {
        target,
        brunch_day: hall.brunch_day,
    };
    let menu = parser::extract_menu(&body, &selection);
    if menu.weeks.is_empty() {
        warn!("{}: no meal blocks found on the page", hall.name);
    }
    output::write_document(out, hall.filename, &menu)
}
