//! Disqualified officer records: delta-ordered upserts, typed reads and
//! deletes over one shared identity space.

pub mod delta;
pub mod errors;
pub mod guard;
pub mod lifecycle;
pub mod models;
pub mod repository;
pub mod resolver;
pub mod service;
pub mod transform;

pub use errors::DisqualificationsServiceError;
pub use service::*;
