//! Application context wiring.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::disqualifications::{
        repository::{DisqualificationRepository, PgDisqualificationRepository},
        resolver::{DeletionDataResolver, PgDeletionDataResolver},
        service::{DisqualificationsService, PgDisqualificationsService},
    },
    notifier::{
        ChangedResourceNotifier, ChsKafkaClient, ChsKafkaConfig, ResourceChangedMapper,
        SystemTimestampSource,
    },
};

/// Startup failure variants.
#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to initialise the database")]
    Database(#[source] sqlx::Error),
}

/// Fully wired service graph.
#[derive(Clone)]
pub struct AppContext {
    pub disqualifications: Arc<dyn DisqualificationsService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Connect to the store, ensure its schema and wire the service graph.
    ///
    /// # Errors
    ///
    /// [`AppInitError::Database`] when connecting or preparing the schema
    /// fails.
    pub async fn from_config(
        database_url: &str,
        chs_kafka: ChsKafkaConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url)
            .await
            .map_err(AppInitError::Database)?;
        database::ensure_schema(&pool)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        let repository: Arc<dyn DisqualificationRepository> =
            Arc::new(PgDisqualificationRepository::new(db));
        let resolver: Arc<dyn DeletionDataResolver> =
            Arc::new(PgDeletionDataResolver::new(Arc::clone(&repository)));

        let mapper = ResourceChangedMapper::new(Arc::new(SystemTimestampSource));
        let notifier: Arc<dyn ChangedResourceNotifier> =
            Arc::new(ChsKafkaClient::new(chs_kafka, mapper));

        let disqualifications: Arc<dyn DisqualificationsService> = Arc::new(
            PgDisqualificationsService::new(repository, resolver, notifier),
        );

        Ok(Self { disqualifications })
    }
}
