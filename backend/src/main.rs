mod config;
mod error;
mod llm;
mod placeholders;
mod services;
mod store;

use crate::config::AppConfig;
use crate::llm::client::OpenAiClient;
use crate::llm::Generator;
use crate::store::Store;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::from_env();

    let store = Store::new(&config.database_path);
    if let Err(e) = store.initialize() {
        error!("Could not initialize database: {}", e);
        return Err(std::io::Error::other(e.to_string()));
    }

    let backend = config
        .openai_api_key
        .as_ref()
        .map(|key| OpenAiClient::new(key.clone(), config.openai_base_url.clone()));
    let generator = web::Data::new(Generator::new(backend, config.openai_model.clone()));
    info!(
        "AI generation {} (model {})",
        if generator.is_configured() { "enabled" } else { "disabled" },
        config.openai_model
    );

    let store = web::Data::new(store);
    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(services::json_config())
            .app_data(store.clone())
            .app_data(generator.clone())
            .service(services::health::configure_routes::<OpenAiClient>())
            .service(services::templates::configure_routes())
            .service(services::folders::configure_routes())
            .service(services::content::configure_routes())
            .service(services::ai::configure_routes::<OpenAiClient>())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
