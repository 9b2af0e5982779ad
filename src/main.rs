use clap::Parser;
use laprec_api::{OptionsService, RecommendationService, RestApi};
use laprec_core::{CurrencyConverter, EUR_TO_TZS};
use laprec_storage::{ModelStore, StoreConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Laptop recommendation lookup service
#[derive(Parser, Debug)]
#[command(name = "laprec")]
#[command(about = "Recommends similar laptops from a static catalog", long_about = None)]
struct Args {
    /// Directory holding the dataset and trained artifacts
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Laptop dataset (CSV), relative to the data directory
    #[arg(long, default_value = "laptops.csv")]
    dataset: PathBuf,

    /// Label encoders (JSON), relative to the data directory
    #[arg(long, default_value = "label_encoders.json")]
    encoders: PathBuf,

    /// Fitted nearest-neighbor index (JSON), relative to the data directory
    #[arg(long, default_value = "knn_model.json")]
    knn_model: PathBuf,

    /// HTTP bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Shillings per Euro applied to every price
    #[arg(long, default_value_t = EUR_TO_TZS)]
    exchange_rate: f64,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn resolve(data_dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        data_dir.join(file)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    info!("Starting laprec v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);

    let config = StoreConfig {
        dataset: resolve(&args.data_dir, &args.dataset),
        encoders: resolve(&args.data_dir, &args.encoders),
        neighbor_index: resolve(&args.data_dir, &args.knn_model),
    };
    let store = Arc::new(ModelStore::open(&config)?);
    info!("Model store initialized");

    let converter = CurrencyConverter::new(args.exchange_rate);
    info!("Exchange rate: {}", converter.rate());

    let recommender = RecommendationService::new(store.clone(), converter);
    let options = OptionsService::new(store);

    let host = args.host.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", host, http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(recommender, options, &host, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://{}:{}/api/", args.host, args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
