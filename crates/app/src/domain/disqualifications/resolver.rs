//! Deletion snapshot resolution.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::domain::disqualifications::{
    delta::DeltaAt,
    errors::DisqualificationsServiceError,
    models::{
        CorporateDisqualification, DisqualificationData, DisqualificationRecord,
        NaturalDisqualification,
    },
    repository::DisqualificationRepository,
};

/// Resolves the variant-specific snapshot attached to deletion events.
///
/// The resolver also owns the conflict check for deletes: destructive intent
/// is refused against data newer than the delete's own delta, unlike the
/// upsert path which absorbs stale writes silently.
#[automock]
#[async_trait]
pub trait DeletionDataResolver: Send + Sync {
    /// Natural snapshot for `officer_id`, or `None` when the natural
    /// projection never held the record.
    ///
    /// # Errors
    ///
    /// `ConflictingDeltaAt` when the stored record is newer than
    /// `request_delta_at`.
    async fn resolve_natural(
        &self,
        officer_id: &str,
        request_delta_at: &DeltaAt,
    ) -> Result<Option<NaturalDisqualification>, DisqualificationsServiceError>;

    /// Corporate snapshot for `officer_id`, or `None` when the corporate
    /// projection never held the record.
    ///
    /// # Errors
    ///
    /// `ConflictingDeltaAt` when the stored record is newer than
    /// `request_delta_at`.
    async fn resolve_corporate(
        &self,
        officer_id: &str,
        request_delta_at: &DeltaAt,
    ) -> Result<Option<CorporateDisqualification>, DisqualificationsServiceError>;
}

/// Repository-backed resolver.
#[derive(Clone)]
pub struct PgDeletionDataResolver {
    repository: Arc<dyn DisqualificationRepository>,
}

impl Debug for PgDeletionDataResolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PgDeletionDataResolver").finish_non_exhaustive()
    }
}

impl PgDeletionDataResolver {
    #[must_use]
    pub fn new(repository: Arc<dyn DisqualificationRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the stored record, refusing the delete when the stored delta is
    /// strictly newer than the request's. The conflict check runs before the
    /// variant check: newer data is protected regardless of which variant
    /// holds it.
    async fn guarded_record(
        &self,
        officer_id: &str,
        request_delta_at: &DeltaAt,
    ) -> Result<Option<DisqualificationRecord>, DisqualificationsServiceError> {
        let Some(record) = self.repository.find_by_id(officer_id).await? else {
            return Ok(None);
        };

        if record.delta_at > *request_delta_at {
            info!(
                officer_id,
                "delete request delta_at is older than the stored record"
            );
            return Err(DisqualificationsServiceError::ConflictingDeltaAt);
        }

        Ok(Some(record))
    }
}

#[async_trait]
impl DeletionDataResolver for PgDeletionDataResolver {
    async fn resolve_natural(
        &self,
        officer_id: &str,
        request_delta_at: &DeltaAt,
    ) -> Result<Option<NaturalDisqualification>, DisqualificationsServiceError> {
        Ok(self
            .guarded_record(officer_id, request_delta_at)
            .await?
            .and_then(|record| match record.data {
                DisqualificationData::Natural(data) => Some(data),
                DisqualificationData::Corporate(_) => None,
            }))
    }

    async fn resolve_corporate(
        &self,
        officer_id: &str,
        request_delta_at: &DeltaAt,
    ) -> Result<Option<CorporateDisqualification>, DisqualificationsServiceError> {
        Ok(self
            .guarded_record(officer_id, request_delta_at)
            .await?
            .and_then(|record| match record.data {
                DisqualificationData::Corporate(data) => Some(data),
                DisqualificationData::Natural(_) => None,
            }))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::disqualifications::repository::MockDisqualificationRepository;

    use super::*;

    fn natural_data() -> NaturalDisqualification {
        NaturalDisqualification {
            surname: "Smith".to_string(),
            forename: Some("Jane".to_string()),
            title: None,
            date_of_birth: None,
            nationality: None,
            disqualifications: Vec::new(),
        }
    }

    fn stored_record(delta_at: &str, data: DisqualificationData) -> DisqualificationRecord {
        DisqualificationRecord {
            officer_id: "CH001".to_string(),
            delta_at: DeltaAt::new(delta_at),
            created_at: "2023-01-01T00:00:00Z".parse().expect("valid timestamp"),
            updated_at: "2023-01-01T00:00:00Z".parse().expect("valid timestamp"),
            officer_id_raw: None,
            data,
        }
    }

    fn resolver(repository: MockDisqualificationRepository) -> PgDeletionDataResolver {
        PgDeletionDataResolver::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn absent_record_resolves_to_no_snapshot() -> TestResult {
        let mut repository = MockDisqualificationRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| id == "CH001")
            .returning(|_| Ok(None));

        let snapshot = resolver(repository)
            .resolve_natural("CH001", &DeltaAt::new("20240101000000000000"))
            .await?;

        assert!(snapshot.is_none(), "expected no snapshot for an absent record");

        Ok(())
    }

    #[tokio::test]
    async fn newer_stored_record_conflicts() {
        let mut repository = MockDisqualificationRepository::new();
        repository.expect_find_by_id().returning(|_| {
            Ok(Some(stored_record(
                "20250101000000000000",
                DisqualificationData::Natural(natural_data()),
            )))
        });

        let result = resolver(repository)
            .resolve_natural("CH001", &DeltaAt::new("20240101000000000000"))
            .await;

        assert!(
            matches!(
                result,
                Err(DisqualificationsServiceError::ConflictingDeltaAt)
            ),
            "expected ConflictingDeltaAt, got {result:?}"
        );
    }

    #[tokio::test]
    async fn equal_delta_is_not_a_conflict() -> TestResult {
        let mut repository = MockDisqualificationRepository::new();
        repository.expect_find_by_id().returning(|_| {
            Ok(Some(stored_record(
                "20240101000000000000",
                DisqualificationData::Natural(natural_data()),
            )))
        });

        let snapshot = resolver(repository)
            .resolve_natural("CH001", &DeltaAt::new("20240101000000000000"))
            .await?;

        assert_eq!(snapshot, Some(natural_data()));

        Ok(())
    }

    #[tokio::test]
    async fn variant_mismatch_resolves_to_no_snapshot() -> TestResult {
        let mut repository = MockDisqualificationRepository::new();
        repository.expect_find_by_id().returning(|_| {
            Ok(Some(stored_record(
                "20230101000000000000",
                DisqualificationData::Natural(natural_data()),
            )))
        });

        let snapshot = resolver(repository)
            .resolve_corporate("CH001", &DeltaAt::new("20240101000000000000"))
            .await?;

        assert!(
            snapshot.is_none(),
            "expected no corporate snapshot for a natural record"
        );

        Ok(())
    }

    #[tokio::test]
    async fn conflict_applies_across_variants() {
        let mut repository = MockDisqualificationRepository::new();
        repository.expect_find_by_id().returning(|_| {
            Ok(Some(stored_record(
                "20250101000000000000",
                DisqualificationData::Natural(natural_data()),
            )))
        });

        let result = resolver(repository)
            .resolve_corporate("CH001", &DeltaAt::new("20240101000000000000"))
            .await;

        assert!(
            matches!(
                result,
                Err(DisqualificationsServiceError::ConflictingDeltaAt)
            ),
            "expected ConflictingDeltaAt, got {result:?}"
        );
    }
}
