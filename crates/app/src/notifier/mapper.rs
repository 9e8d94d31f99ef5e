//! Resource-changed event mapping.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use jiff::Timestamp;
use serde::Serialize;
use serde_json::Value;

use crate::domain::disqualifications::models::{DisqualificationData, OfficerType};

use super::errors::NotifierError;

const CHANGED: &str = "changed";
const DELETED: &str = "deleted";

/// Injected time source so event mapping stays deterministic under test.
pub trait TimestampSource: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock timestamp source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimestampSource;

impl TimestampSource for SystemTimestampSource {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Internal mutation to publish downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceChangedRequest {
    pub context_id: String,
    pub officer_id: String,
    pub resource_type: Option<OfficerType>,
    pub deleted_data: Option<DisqualificationData>,
    pub is_delete: bool,
}

impl ResourceChangedRequest {
    /// Request for an accepted upsert.
    #[must_use]
    pub fn changed(context_id: &str, officer_id: &str, resource_type: OfficerType) -> Self {
        Self {
            context_id: context_id.to_string(),
            officer_id: officer_id.to_string(),
            resource_type: Some(resource_type),
            deleted_data: None,
            is_delete: false,
        }
    }

    /// Request for an accepted delete, with the pre-deletion snapshot when
    /// one could be resolved.
    #[must_use]
    pub fn deleted(
        context_id: &str,
        officer_id: &str,
        resource_type: OfficerType,
        deleted_data: Option<DisqualificationData>,
    ) -> Self {
        Self {
            context_id: context_id.to_string(),
            officer_id: officer_id.to_string(),
            resource_type: Some(resource_type),
            deleted_data,
            is_delete: true,
        }
    }
}

/// Event payload posted to the resource-changed endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangedResource {
    pub resource_uri: String,
    pub resource_kind: String,
    pub context_id: String,
    pub event: ChangedResourceEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_data: Option<Value>,
}

/// Event descriptor inside a [`ChangedResource`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangedResourceEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub published_at: String,
}

/// Maps internal mutations into downstream change events.
#[derive(Clone)]
pub struct ResourceChangedMapper {
    timestamps: Arc<dyn TimestampSource>,
}

impl Debug for ResourceChangedMapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ResourceChangedMapper").finish_non_exhaustive()
    }
}

impl ResourceChangedMapper {
    #[must_use]
    pub fn new(timestamps: Arc<dyn TimestampSource>) -> Self {
        Self { timestamps }
    }

    /// Build the downstream event for `request`.
    ///
    /// Deleted snapshots are serialised and reparsed into a generic
    /// structural value so the event payload stays representation-agnostic.
    ///
    /// # Errors
    ///
    /// `UnknownResourceType` when the request carries no variant;
    /// `SerDes` when the deleted snapshot cannot be round-tripped.
    pub fn map_changed_resource(
        &self,
        request: &ResourceChangedRequest,
    ) -> Result<ChangedResource, NotifierError> {
        let resource_type = request
            .resource_type
            .ok_or(NotifierError::UnknownResourceType)?;

        let deleted_data = if request.is_delete {
            request.deleted_data.as_ref().map(round_trip).transpose()?
        } else {
            None
        };

        Ok(ChangedResource {
            resource_uri: format!(
                "/disqualified-officers/{}/{}",
                resource_type.as_str(),
                request.officer_id
            ),
            resource_kind: format!("disqualified-officer-{}", resource_type.as_str()),
            context_id: request.context_id.clone(),
            event: ChangedResourceEvent {
                event_type: if request.is_delete { DELETED } else { CHANGED }.to_string(),
                published_at: self.timestamps.now().to_string(),
            },
            deleted_data,
        })
    }
}

fn round_trip(data: &DisqualificationData) -> Result<Value, NotifierError> {
    let serialised = serde_json::to_string(data)?;

    Ok(serde_json::from_str(&serialised)?)
}
