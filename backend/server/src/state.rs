use std::sync::Arc;

use tokio::sync::RwLock;

use super::{config::Config, registry::Registry};

pub struct AppState {
    pub config: Config,
    pub registry: RwLock<Registry>,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let registry = Registry::seeded(config.school_domain.clone(), config.enforce_capacity);

        Arc::new(Self {
            config,
            registry: RwLock::new(registry),
        })
    }
}
