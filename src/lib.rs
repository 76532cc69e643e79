use std::sync::Arc;

use anyhow::bail;
use poem::{
    middleware::{AddData, Cors, NormalizePath, TrailingSlash},
    Endpoint, EndpointExt, Route,
};
use poem_openapi::OpenApiService;
use repository::{
    role::{PgRoleStore, RoleStore},
    role_memory::MemoryRoleStore,
};
use route::role::ApiRole;
use settings::Config;

pub mod cli;
pub mod core;
pub mod factory;
pub mod model;
pub mod repository;
pub mod route;
pub mod schema;
pub mod settings;

pub struct AppState {
    pub roles: Arc<dyn RoleStore>,
}

impl AppState {
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }
}

/// Builds the store selected by `STORE`, connecting to PostgreSQL when needed.
pub async fn init_role_store(config: &Config) -> anyhow::Result<Arc<dyn RoleStore>> {
    match config.store.as_deref().unwrap_or("postgres") {
        "postgres" => {
            tracing::info!(
                "init Postgres connection on {}",
                config.redacted_database_url()
            );
            let pool = crate::core::db::init_pool(config).await?;
            Ok(Arc::new(PgRoleStore::new(pool)))
        }
        "memory" => {
            tracing::warn!("using in-memory role store, roles are lost on shutdown");
            Ok(Arc::new(MemoryRoleStore::new()))
        }
        other => bail!("unknown store {other:?}, expected postgres or memory"),
    }
}

pub fn init_openapi_route(app_state: Arc<AppState>, config: &Config) -> impl Endpoint {
    let prefix = config.prefix.clone().unwrap_or("/".to_string());
    let openapi_route =
        OpenApiService::new(ApiRole, "Role Hierarchy", "1.0").server(prefix.clone());
    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    Route::new()
        .nest(prefix, openapi_route)
        .nest("/docs", ui)
        .at("openapi.json", openapi_json_endpoint)
        .with(AddData::new(app_state))
        .with(Cors::new())
        .with(NormalizePath::new(TrailingSlash::Trim))
}
