//! Downstream resource-changed notification pipeline.

mod client;
mod errors;
mod mapper;

pub use client::{ChangedResourceNotifier, ChsKafkaClient, ChsKafkaConfig, MockChangedResourceNotifier};
pub use errors::NotifierError;
pub use mapper::{
    ChangedResource, ChangedResourceEvent, ResourceChangedMapper, ResourceChangedRequest,
    SystemTimestampSource, TimestampSource,
};
