use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::{info, warn};

use loan_api::routes;
use loan_api::{ModelState, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("Starting loan approval prediction API");

    let config = ServerConfig::from_env();

    // Loaded once; a failure is logged and leaves /predict answering 503.
    let state = web::Data::new(ModelState::load(&config.model_dir));
    if !state.is_ready() {
        warn!("Serving without a model; /predict will return errors");
    }

    let bind_address = config.bind_address();
    let json_limit = config.json_limit;

    info!("Server listening on http://{}", bind_address);
    info!("Workers: {}", config.workers);
    info!("Endpoints:");
    info!("   GET  /            - liveness");
    info!("   GET  /model-info  - model details");
    info!("   POST /predict     - loan approval prediction");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(routes::cors())
            .app_data(state.clone())
            .app_data(routes::json_config(json_limit))
            .configure(routes::configure)
    })
    .workers(config.workers)
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await
    .context("server terminated with an error")
}
