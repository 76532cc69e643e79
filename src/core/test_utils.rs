use std::sync::Arc;

use crate::{
    repository::{role::RoleStore, role_memory::MemoryRoleStore},
    settings::Config,
    AppState,
};

/// Config for endpoint tests: everything is served under `/api` and no
/// environment is read.
pub fn test_config() -> Config {
    Config {
        env: "server".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8000,
        prefix: Some("/api".to_string()),
        database_url: String::new(),
        store: Some("memory".to_string()),
        log_dir: None,
        log_level: None,
        db_min_connections: None,
        db_max_connections: None,
    }
}

pub fn memory_app_state() -> (Arc<AppState>, Arc<MemoryRoleStore>) {
    let store = Arc::new(MemoryRoleStore::new());
    let roles: Arc<dyn RoleStore> = store.clone();
    (Arc::new(AppState::new(roles)), store)
}
