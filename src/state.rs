//! Wiring of the gateways over a shared PostgreSQL pool.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{LinkResolver, PriceGroupResolver};
use crate::config::Config;
use crate::infrastructure::persistence::{PgQueryExecutor, StorefrontFieldHelper};

pub type PgLinkResolver = LinkResolver<PgQueryExecutor, StorefrontFieldHelper>;
pub type PgPriceGroupResolver = PriceGroupResolver<PgQueryExecutor, StorefrontFieldHelper>;

/// Both storefront gateways sharing one executor and field helper.
///
/// Cheap to clone and safe to share between concurrent requests.
#[derive(Clone)]
pub struct Gateways {
    pub links: Arc<PgLinkResolver>,
    pub price_groups: Arc<PgPriceGroupResolver>,
}

impl Gateways {
    /// Builds the gateways over an existing pool.
    pub fn new(pool: Arc<PgPool>, fields: StorefrontFieldHelper) -> Self {
        let executor = Arc::new(PgQueryExecutor::new(pool));
        let fields = Arc::new(fields);

        Self {
            links: Arc::new(LinkResolver::new(executor.clone(), fields.clone())),
            price_groups: Arc::new(PriceGroupResolver::new(executor, fields)),
        }
    }

    /// Connects a pool with the configured settings and builds the gateways.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable.
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(&config.database_url)
            .await
            .context("Failed to connect to database")?;
        tracing::info!("Connected to database");

        Ok(Self::new(
            Arc::new(pool),
            StorefrontFieldHelper::new(config.link_attribute_columns.clone()),
        ))
    }
}
