//! Staleness guard for the delta-ordered upsert flow.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::domain::disqualifications::{delta::DeltaAt, repository::DisqualificationRepository};

/// Decides whether an inbound upsert is newer than the stored state.
#[derive(Clone)]
pub struct StalenessGuard {
    repository: Arc<dyn DisqualificationRepository>,
}

impl Debug for StalenessGuard {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StalenessGuard").finish_non_exhaustive()
    }
}

impl StalenessGuard {
    #[must_use]
    pub fn new(repository: Arc<dyn DisqualificationRepository>) -> Self {
        Self { repository }
    }

    /// Accept the write only when no stored record carries a delta at or
    /// beyond the incoming one. An equal delta counts as already applied, so
    /// replaying the same delta is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the underlying storage error when the lookup fails.
    pub async fn is_acceptable(
        &self,
        officer_id: &str,
        incoming_delta_at: &DeltaAt,
    ) -> Result<bool, sqlx::Error> {
        let at_or_after = self
            .repository
            .find_with_delta_at_ge(officer_id, incoming_delta_at)
            .await?;

        Ok(at_or_after.is_empty())
    }
}
