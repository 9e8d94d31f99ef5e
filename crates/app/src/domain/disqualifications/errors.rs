//! Disqualifications service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error as ThisError;

use crate::notifier::NotifierError;

use super::models::UnknownOfficerType;

/// Disqualifications service error variants.
#[derive(Debug, ThisError)]
pub enum DisqualificationsServiceError {
    /// No record for the requested officer id and variant.
    #[error("disqualification not found")]
    NotFound,

    /// Officer type was not `natural` or `corporate`.
    #[error("invalid officer type")]
    InvalidOfficerType,

    /// A required payload field was absent or blank.
    #[error("missing required data")]
    MissingRequiredData,

    /// Provided data failed validation or was rejected by the store.
    #[error("invalid data")]
    InvalidData,

    /// Delete request carried an older delta than the stored record.
    #[error("request delta_at is older than the stored record")]
    ConflictingDeltaAt,

    /// Change event could not be built for publication.
    #[error("change event mapping failed")]
    Notifier(#[source] NotifierError),

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<UnknownOfficerType> for DisqualificationsServiceError {
    fn from(_: UnknownOfficerType) -> Self {
        Self::InvalidOfficerType
    }
}

impl From<Error> for DisqualificationsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation | ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation) => {
                Self::InvalidData
            }
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = DisqualificationsServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, DisqualificationsServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn unclassified_errors_map_to_sql() {
        let error = DisqualificationsServiceError::from(Error::PoolClosed);

        assert!(
            matches!(error, DisqualificationsServiceError::Sql(_)),
            "expected Sql, got {error:?}"
        );
    }
}
