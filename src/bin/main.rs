use std::sync::Arc;

use poem::listener::TcpListener;
use role_hierarchy::{init_openapi_route, init_role_store, settings::get_config, AppState};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config()?;

    let log_level = match &config.log_level {
        Some(val) => val.parse::<Level>()?,
        None => Level::DEBUG,
    };
    // Logging to File
    let log_dir = config.log_dir.clone().unwrap_or("./logs".to_string());
    let file_appender = tracing_appender::rolling::daily(log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log_level)
        .init();

    // Logging to Console
    // tracing_subscriber::fmt().with_max_level(log_level).init();

    tracing::info!("{}", config.env_source());
    tracing::info!("run with config: {:?}", config);

    // Init Role Store
    let roles = init_role_store(&config).await?;
    // Init App State
    let app_state = Arc::new(AppState::new(roles));

    let app = init_openapi_route(app_state, &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run(app)
    .await?;
    Ok(())
}
