//! Notifier errors.

use thiserror::Error;

/// Resource-changed pipeline error variants.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// Request carried no resource type. Upstream flows always set one, so
    /// hitting this is a programming-contract violation, not bad input.
    #[error("unknown disqualification resource type")]
    UnknownResourceType,

    /// Deleted snapshot could not be serialised for the event payload.
    #[error("failed to serialise deleted data")]
    SerDes(#[from] serde_json::Error),

    /// Transport-level failure calling the resource-changed endpoint.
    #[error("resource changed request failed")]
    Http(#[from] reqwest::Error),
}
