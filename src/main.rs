//! minutecache CLI - preload the configured meeting files and print a
//! one-line-per-meeting summary.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minutecache::Loader;

/// Initialize the tracing subscriber for logging.
/// Use RUST_LOG to control the level (e.g. RUST_LOG=debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MINUTECACHE_URL").ok())
        .ok_or_else(|| anyhow::anyhow!("usage: minutecache <base-url> (or set MINUTECACHE_URL)"))?;

    info!(%base_url, "preloading meeting records");

    let mut loader = Loader::new(base_url)?;
    let preloaded = loader.preload().await?;

    println!(
        "{} meetings loaded ({} council members)",
        preloaded.meetings.len(),
        preloaded.config.council_members.len()
    );
    for meeting in &preloaded.meetings {
        println!(
            "{}  {:<10}  {} motions",
            meeting.date.as_deref().unwrap_or("?"),
            meeting.status.as_deref().unwrap_or("?"),
            meeting.motions.as_ref().map(Vec::len).unwrap_or(0)
        );
    }

    Ok(())
}
