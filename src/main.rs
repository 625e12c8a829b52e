use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use payshare_engine::api::{AppState, create_router};
use payshare_engine::config::ConfigLoader;
use payshare_engine::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "payshare-engine",
    about = "Serve the take-home pay and household apportionment API",
    version
)]
struct Cli {
    /// Directory holding statutory.yaml and tax_table.yaml
    #[arg(long, default_value = "./config/ph2024")]
    config: PathBuf,
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    telemetry::init(telemetry::DEFAULT_LOG_FILTER)?;

    let loader = ConfigLoader::load(&cli.config)?;
    let metadata = loader.config().metadata();
    info!(
        code = %metadata.code,
        version = %metadata.version,
        path = %cli.config.display(),
        "Statutory schedule loaded"
    );

    let app = create_router(AppState::new(loader));

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting server on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["payshare-engine"]);
        assert_eq!(cli.config, PathBuf::from("./config/ph2024"));
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 3000);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "payshare-engine",
            "--config",
            "/etc/payshare",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ]);
        assert_eq!(cli.config, PathBuf::from("/etc/payshare"));
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 8080);
    }
}
