//! Disqualifications service.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::notifier::{ChangedResourceNotifier, NotifierError, ResourceChangedRequest};

use super::{
    errors::DisqualificationsServiceError,
    guard::StalenessGuard,
    lifecycle,
    models::{
        CorporateUpsert, DeleteRequestParameters, DisqualificationData, DisqualificationRecord,
        NaturalUpsert, OfficerType,
    },
    repository::DisqualificationRepository,
    resolver::DeletionDataResolver,
    transform,
};

/// Record-of-truth operations for disqualified officers.
#[async_trait]
pub trait DisqualificationsService: Send + Sync {
    /// Save or update a natural disqualification. A stale delta is absorbed
    /// silently: the call succeeds without mutating the store or publishing
    /// an event.
    async fn upsert_natural(
        &self,
        context_id: &str,
        officer_id: &str,
        payload: NaturalUpsert,
    ) -> Result<(), DisqualificationsServiceError>;

    /// Save or update a corporate disqualification; stale-delta semantics as
    /// for [`Self::upsert_natural`].
    async fn upsert_corporate(
        &self,
        context_id: &str,
        officer_id: &str,
        payload: CorporateUpsert,
    ) -> Result<(), DisqualificationsServiceError>;

    /// Retrieve a natural-discriminated record. A record stored under the
    /// corporate variant is `NotFound` through this accessor.
    async fn get_natural(
        &self,
        officer_id: &str,
    ) -> Result<DisqualificationRecord, DisqualificationsServiceError>;

    /// Retrieve a corporate-discriminated record; variant semantics as for
    /// [`Self::get_natural`].
    async fn get_corporate(
        &self,
        officer_id: &str,
    ) -> Result<DisqualificationRecord, DisqualificationsServiceError>;

    /// Delete a disqualification and publish the deletion event. The event
    /// is published even when no record was ever stored, carrying a null
    /// snapshot, so downstream consumers can reconcile deletion intent.
    async fn delete(
        &self,
        parameters: DeleteRequestParameters,
    ) -> Result<(), DisqualificationsServiceError>;
}

/// Orchestrator composing the record store, staleness guard, deletion data
/// resolver and change notifier.
#[derive(Clone)]
pub struct PgDisqualificationsService {
    repository: Arc<dyn DisqualificationRepository>,
    resolver: Arc<dyn DeletionDataResolver>,
    notifier: Arc<dyn ChangedResourceNotifier>,
    guard: StalenessGuard,
}

impl Debug for PgDisqualificationsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PgDisqualificationsService").finish_non_exhaustive()
    }
}

impl PgDisqualificationsService {
    #[must_use]
    pub fn new(
        repository: Arc<dyn DisqualificationRepository>,
        resolver: Arc<dyn DeletionDataResolver>,
        notifier: Arc<dyn ChangedResourceNotifier>,
    ) -> Self {
        let guard = StalenessGuard::new(Arc::clone(&repository));

        Self {
            repository,
            resolver,
            notifier,
            guard,
        }
    }

    async fn persist_and_publish(
        &self,
        context_id: &str,
        mut record: DisqualificationRecord,
        existing: Option<DisqualificationRecord>,
    ) -> Result<(), DisqualificationsServiceError> {
        record.created_at = lifecycle::preserved_created_at(existing.as_ref(), record.updated_at);
        let officer_type = record.officer_type();

        let saved = self.repository.save(&record).await?;
        info!(
            context_id,
            officer_id = %saved.officer_id,
            "disqualification updated in store"
        );

        self.publish(ResourceChangedRequest::changed(
            context_id,
            &saved.officer_id,
            officer_type,
        ))
        .await
    }

    /// Publish the change event. The store mutation is already durable at
    /// this point: transport failures and non-success statuses are reported
    /// and swallowed, never rolled back; mapping failures propagate.
    async fn publish(
        &self,
        request: ResourceChangedRequest,
    ) -> Result<(), DisqualificationsServiceError> {
        let context_id = request.context_id.clone();
        let officer_id = request.officer_id.clone();

        match self.notifier.publish(request).await {
            Ok(status) if status.is_success() => {
                info!(context_id, officer_id, "resource changed event published");
                Ok(())
            }
            Ok(status) => {
                error!(
                    context_id,
                    officer_id,
                    %status,
                    "resource changed endpoint returned non-success"
                );
                Ok(())
            }
            Err(NotifierError::Http(source)) => {
                error!(
                    context_id,
                    officer_id,
                    error = %source,
                    "resource changed call failed"
                );
                Ok(())
            }
            Err(source) => Err(DisqualificationsServiceError::Notifier(source)),
        }
    }
}

#[async_trait]
impl DisqualificationsService for PgDisqualificationsService {
    async fn upsert_natural(
        &self,
        context_id: &str,
        officer_id: &str,
        payload: NaturalUpsert,
    ) -> Result<(), DisqualificationsServiceError> {
        let existing = self.repository.find_by_id(officer_id).await?;

        if !self
            .guard
            .is_acceptable(officer_id, &payload.internal.delta_at)
            .await?
        {
            info!(context_id, officer_id, "delta_at on request is stale, ignoring");
            return Ok(());
        }

        let record = transform::transform_natural(officer_id, &payload)?;

        self.persist_and_publish(context_id, record, existing).await
    }

    async fn upsert_corporate(
        &self,
        context_id: &str,
        officer_id: &str,
        payload: CorporateUpsert,
    ) -> Result<(), DisqualificationsServiceError> {
        let existing = self.repository.find_by_id(officer_id).await?;

        if !self
            .guard
            .is_acceptable(officer_id, &payload.internal.delta_at)
            .await?
        {
            info!(context_id, officer_id, "delta_at on request is stale, ignoring");
            return Ok(());
        }

        let record = transform::transform_corporate(officer_id, &payload)?;

        self.persist_and_publish(context_id, record, existing).await
    }

    async fn get_natural(
        &self,
        officer_id: &str,
    ) -> Result<DisqualificationRecord, DisqualificationsServiceError> {
        let record = self
            .repository
            .find_by_id(officer_id)
            .await?
            .ok_or(DisqualificationsServiceError::NotFound)?;

        match record.data {
            DisqualificationData::Natural(_) => Ok(record),
            DisqualificationData::Corporate(_) => Err(DisqualificationsServiceError::NotFound),
        }
    }

    async fn get_corporate(
        &self,
        officer_id: &str,
    ) -> Result<DisqualificationRecord, DisqualificationsServiceError> {
        let record = self
            .repository
            .find_by_id(officer_id)
            .await?
            .ok_or(DisqualificationsServiceError::NotFound)?;

        match record.data {
            DisqualificationData::Corporate(_) => Ok(record),
            DisqualificationData::Natural(_) => Err(DisqualificationsServiceError::NotFound),
        }
    }

    async fn delete(
        &self,
        parameters: DeleteRequestParameters,
    ) -> Result<(), DisqualificationsServiceError> {
        let officer_type: OfficerType = parameters.officer_type.parse()?;

        let snapshot = match officer_type {
            OfficerType::Natural => self
                .resolver
                .resolve_natural(&parameters.officer_id, &parameters.request_delta_at)
                .await?
                .map(DisqualificationData::Natural),
            OfficerType::Corporate => self
                .resolver
                .resolve_corporate(&parameters.officer_id, &parameters.request_delta_at)
                .await?
                .map(DisqualificationData::Corporate),
        };

        if snapshot.is_some() {
            self.repository.delete_by_id(&parameters.officer_id).await?;
            info!(
                context_id = %parameters.context_id,
                officer_id = %parameters.officer_id,
                "disqualification deleted from store"
            );
        } else {
            info!(
                context_id = %parameters.context_id,
                officer_id = %parameters.officer_id,
                "no stored snapshot for delete, publishing deletion event only"
            );
        }

        self.publish(ResourceChangedRequest::deleted(
            &parameters.context_id,
            &parameters.officer_id,
            officer_type,
            snapshot,
        ))
        .await
    }
}
