use anyhow::Result;
use clap::Parser;
use intf_report::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let args = cli::Args::parse();
    // .env never overrides variables already set
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    tracing::info!("{} {}", version::NAME, version::VERSION);

    let app_config = config::AppConfig::load(args.config.as_deref())?;
    if !app_config.api.verify_tls {
        tracing::warn!("TLS certificate verification is disabled");
    }
    let client = inventory_repo::IpfClient::new(&app_config.api)?;
    tracing::info!(endpoint = client.endpoint(), snapshot = %app_config.api.snapshot, "inventory API");

    let options = pipeline::RunOptions {
        format: args.format(),
        output_dir: &args.output_dir,
        hostname_filter: args.hostname.as_deref(),
    };
    let summary = pipeline::run(&app_config, &client, &options, &chrono::Local::now()).await?;
    tracing::info!(
        devices = summary.devices,
        interfaces = summary.interfaces,
        "done, report saved to {}",
        summary.path.display()
    );

    Ok(())
}
