use crate::catalog::{CatalogError, CatalogStore};
use crate::clients::StorefrontClient;
use crate::config::{ConfigError, StorefrontConfig};
use crate::storefront_actor::{self, Storefront};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::info;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The running storefront: the actor task and the client used to drive it.
pub struct StorefrontSystem {
    pub storefront_client: StorefrontClient,
    config: StorefrontConfig,
    handle: JoinHandle<Storefront>,
}

impl StorefrontSystem {
    /// Loads the config named by `POPCORN_CONFIG` (or the defaults) and
    /// starts the storefront over the bundled catalog.
    pub fn from_env() -> Result<Self, StartupError> {
        let config = StorefrontConfig::load()?;
        Self::new(&config)
    }

    /// Loads the bundled catalog and starts the storefront actor.
    pub fn new(config: &StorefrontConfig) -> Result<Self, StartupError> {
        let catalog = CatalogStore::seeded()?;
        Self::with_catalog(catalog, config)
    }

    /// Starts the storefront actor over an already loaded catalog.
    pub fn with_catalog(
        catalog: CatalogStore,
        config: &StorefrontConfig,
    ) -> Result<Self, StartupError> {
        config.validate()?;
        info!(
            products = catalog.all().len(),
            notice_ttl_ms = config.notice_ttl_ms,
            "Starting storefront"
        );
        let storefront = Storefront::new(catalog, config.notice_ttl());
        let (actor, client) = storefront_actor::new(storefront, config.channel_capacity);
        let handle = tokio::spawn(actor.run(()));

        Ok(Self {
            storefront_client: StorefrontClient::new(client),
            config: config.clone(),
            handle,
        })
    }

    /// The config the system was started with.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Drops the client and waits for the actor to drain its inbox.
    ///
    /// Clones of the client handed out earlier keep the actor alive, so they
    /// must be dropped before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        drop(self.storefront_client);
        let storefront = self.handle.await.map_err(|e| e.to_string())?;
        info!(
            cart_count = storefront.cart().count(),
            "Storefront stopped"
        );
        Ok(())
    }
}
