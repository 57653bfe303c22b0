use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    MakerService, ProductService, SeaOrmMakerService, SeaOrmProductService, SeaOrmUserService,
    UserService, seed,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub maker_service: Arc<dyn MakerService>,

    pub product_service: Arc<dyn ProductService>,

    pub user_service: Arc<dyn UserService>,
}

impl SharedState {
    /// Connects to the database, applies migrations and, when enabled,
    /// provisions the default accounts.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let state = Self::with_store(config, store);

        if state.config.seed.enabled {
            seed::seed_default_users(state.user_service.as_ref()).await?;
        }

        Ok(state)
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let security = Arc::new(config.security.clone());

        let maker_service =
            Arc::new(SeaOrmMakerService::new(store.clone())) as Arc<dyn MakerService>;
        let product_service =
            Arc::new(SeaOrmProductService::new(store.clone())) as Arc<dyn ProductService>;
        let user_service =
            Arc::new(SeaOrmUserService::new(store.clone(), security)) as Arc<dyn UserService>;

        Self {
            config: Arc::new(config),
            store,
            maker_service,
            product_service,
            user_service,
        }
    }
}
