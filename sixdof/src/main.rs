use anyhow::Result;
use clap::Parser;
use sixdof::config::Args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let summaries = sixdof::app::run(&args)?;

    let successes = summaries.iter().filter(|s| s.success).count();
    tracing::info!("Finished {} episodes, {} successful.", summaries.len(), successes);
    Ok(())
}
