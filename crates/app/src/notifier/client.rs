//! Resource-changed transport client.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};

use super::{
    errors::NotifierError,
    mapper::{ResourceChangedMapper, ResourceChangedRequest},
};

/// Downstream notification transport. Non-success statuses are returned to
/// the caller as-is; retry, if any, lives outside this core.
#[automock]
#[async_trait]
pub trait ChangedResourceNotifier: Send + Sync {
    /// Map `request` into a change event and post it downstream, returning
    /// the response status.
    ///
    /// # Errors
    ///
    /// Mapping failures (`UnknownResourceType`, `SerDes`) and transport
    /// failures (`Http`).
    async fn publish(&self, request: ResourceChangedRequest) -> Result<StatusCode, NotifierError>;
}

/// Configuration for the resource-changed endpoint.
#[derive(Debug, Clone)]
pub struct ChsKafkaConfig {
    /// Base URL of the chs-kafka-api instance, e.g. `"http://localhost:5011"`.
    pub base_url: String,
}

/// HTTP client posting change events to the chs-kafka-api.
#[derive(Clone)]
pub struct ChsKafkaClient {
    config: ChsKafkaConfig,
    http: Client,
    mapper: ResourceChangedMapper,
}

impl Debug for ChsKafkaClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ChsKafkaClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ChsKafkaClient {
    #[must_use]
    pub fn new(config: ChsKafkaConfig, mapper: ResourceChangedMapper) -> Self {
        Self {
            config,
            http: Client::new(),
            mapper,
        }
    }
}

#[async_trait]
impl ChangedResourceNotifier for ChsKafkaClient {
    async fn publish(&self, request: ResourceChangedRequest) -> Result<StatusCode, NotifierError> {
        let event = self.mapper.map_changed_resource(&request)?;
        let url = format!("{}/private/resource-changed", self.config.base_url);

        let response = self.http.post(&url).json(&event).send().await?;

        Ok(response.status())
    }
}
