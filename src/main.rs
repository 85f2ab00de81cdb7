use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use clash_sub::models::AppState;
use clash_sub::subconverter;
use clash_sub::web_handlers::interfaces;
use clash_sub::Settings;

/// Convert proxy share-link subscriptions into Clash configurations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (.yaml, .yml or .toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address (e.g., 127.0.0.1 or 0.0.0.0)
    #[arg(short, long, value_name = "ADDRESS")]
    address: Option<String>,

    /// Listen port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Subscription URL to process directly instead of starting the server
    #[arg(long, value_name = "URL", requires = "output")]
    url: Option<String>,

    /// Output file path for subscription conversion (must be used with --url)
    #[arg(short, long, value_name = "OUTPUT_FILE", requires = "url")]
    output: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let mut settings = match args.config.as_deref() {
        Some(path) => match Settings::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    env_logger::init_from_env(Env::default().default_filter_or(settings.log_level.as_str()));

    if let Some(address) = args.address {
        settings.listen_address = address;
    }
    if let Some(port) = args.port {
        settings.listen_port = port;
    }

    // One-shot conversion
    if let (Some(url), Some(output_file)) = (args.url, args.output) {
        info!(
            "Processing subscription from URL: {} to file: {}",
            url, output_file
        );
        return match subconverter(&url, &settings).await {
            Ok(document) => {
                std::fs::write(&output_file, document)?;
                info!("Successfully wrote subscription to {}", output_file);
                Ok(())
            }
            Err(e) => {
                error!("Conversion failed: {}", e);
                std::process::exit(1);
            }
        };
    }

    let listen_address = settings.listen_addr();
    let app_state = web::Data::new(AppState::new(settings));

    info!("clash-sub starting on {}", listen_address);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(interfaces::config)
            // For health check
            .route("/", web::get().to(|| async { "clash-sub is running!" }))
    })
    .bind(listen_address)?
    .run()
    .await
}
