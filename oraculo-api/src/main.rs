use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use oraculo_api::config::{ApiConfig, CorsConfig};
use oraculo_api::helpers::backends::{connect_cache, connect_store};
use oraculo_api::helpers::llm::{create_local_client, create_remote_client};
use oraculo_api::helpers::logging::init_logging;
use oraculo_api::resolver::{AnswerResolver, ResolverSettings};
use oraculo_api::state::AppState;
use oraculo_api::handlers;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Question answering service", long_about = None)]
struct Args {
    /// Path to the TOML config file (default: <config dir>/oraculo/api.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, overriding the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, config_path) = ApiConfig::load(args.config)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let _log_guard = init_logging(config.logging.as_ref())?;
    info!(path = %config_path.display(), "Loaded configuration");

    let store = connect_store(&config.mongo).await?;
    let cache = connect_cache(&config.redis).await?;
    let local = create_local_client(&config.local)?;
    let remote = create_remote_client(&config.remote)?;

    let resolver = AnswerResolver::new(
        cache.clone(),
        store.clone(),
        local,
        remote,
        ResolverSettings::from(&config),
    );
    let app_state = web::Data::new(AppState {
        resolver,
        store,
        cache,
    });

    let cors_config = config.cors.clone();
    let bind_addr = config.bind_address();
    info!("Starting oraculo-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::NormalizePath::trim())
            .wrap(build_cors(cors_config.as_ref()))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}

fn build_cors(config: Option<&CorsConfig>) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    match config {
        Some(config) => config
            .allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
        None => cors,
    }
}
