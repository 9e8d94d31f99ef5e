//! Creation timestamp lifecycle rule.

use jiff::Timestamp;

use crate::domain::disqualifications::models::DisqualificationRecord;

/// Creation time to persist for an accepted write.
///
/// An existing record keeps its original creation time verbatim; a first
/// write seeds it from the new record's update time. Creation time is
/// therefore write-once per officer id and never regresses.
#[must_use]
pub fn preserved_created_at(
    existing: Option<&DisqualificationRecord>,
    updated_at: Timestamp,
) -> Timestamp {
    existing.map_or(updated_at, |record| record.created_at)
}
