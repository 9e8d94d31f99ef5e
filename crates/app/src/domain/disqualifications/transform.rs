//! Inbound payload to unified record transformation.

use crate::domain::disqualifications::{
    errors::DisqualificationsServiceError,
    models::{CorporateUpsert, DisqualificationData, DisqualificationRecord, NaturalUpsert},
};

/// Build the unified natural record for `officer_id`.
///
/// Pure; the provisional creation time is overwritten by the lifecycle rule
/// before the record is persisted.
///
/// # Errors
///
/// Returns `MissingRequiredData` when the surname is absent.
pub fn transform_natural(
    officer_id: &str,
    payload: &NaturalUpsert,
) -> Result<DisqualificationRecord, DisqualificationsServiceError> {
    if payload.data.surname.trim().is_empty() {
        return Err(DisqualificationsServiceError::MissingRequiredData);
    }

    Ok(DisqualificationRecord {
        officer_id: officer_id.to_string(),
        delta_at: payload.internal.delta_at.clone(),
        created_at: payload.internal.updated_at,
        updated_at: payload.internal.updated_at,
        officer_id_raw: payload.internal.officer_id_raw.clone(),
        data: DisqualificationData::Natural(payload.data.clone()),
    })
}

/// Build the unified corporate record for `officer_id`.
///
/// # Errors
///
/// Returns `MissingRequiredData` when the company name is absent.
pub fn transform_corporate(
    officer_id: &str,
    payload: &CorporateUpsert,
) -> Result<DisqualificationRecord, DisqualificationsServiceError> {
    if payload.data.company_name.trim().is_empty() {
        return Err(DisqualificationsServiceError::MissingRequiredData);
    }

    Ok(DisqualificationRecord {
        officer_id: officer_id.to_string(),
        delta_at: payload.internal.delta_at.clone(),
        created_at: payload.internal.updated_at,
        updated_at: payload.internal.updated_at,
        officer_id_raw: payload.internal.officer_id_raw.clone(),
        data: DisqualificationData::Corporate(payload.data.clone()),
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::disqualifications::{
        delta::DeltaAt,
        models::{
            CorporateDisqualification, InternalUpsertData, NaturalDisqualification, OfficerType,
        },
    };

    use super::*;

    fn internal(delta_at: &str, updated_at: &str) -> InternalUpsertData {
        InternalUpsertData {
            delta_at: DeltaAt::new(delta_at),
            updated_at: updated_at.parse().expect("valid timestamp"),
            officer_id_raw: None,
        }
    }

    fn natural(surname: &str) -> NaturalDisqualification {
        NaturalDisqualification {
            surname: surname.to_string(),
            forename: Some("Jane".to_string()),
            title: None,
            date_of_birth: None,
            nationality: Some("British".to_string()),
            disqualifications: Vec::new(),
        }
    }

    #[test]
    fn natural_payload_maps_to_a_natural_record() -> TestResult {
        let payload = NaturalUpsert {
            internal: internal("20230101000000000000", "2023-01-01T00:00:00Z"),
            data: natural("Smith"),
        };

        let record = transform_natural("CH001", &payload)?;

        assert_eq!(record.officer_id, "CH001");
        assert_eq!(record.officer_type(), OfficerType::Natural);
        assert_eq!(record.delta_at, DeltaAt::new("20230101000000000000"));
        assert_eq!(record.created_at, record.updated_at);

        Ok(())
    }

    #[test]
    fn raw_officer_id_is_carried_onto_the_record() -> TestResult {
        let mut payload = NaturalUpsert {
            internal: internal("20230101000000000000", "2023-01-01T00:00:00Z"),
            data: natural("Smith"),
        };
        payload.internal.officer_id_raw = Some("1234567890".to_string());

        let record = transform_natural("CH001", &payload)?;

        assert_eq!(record.officer_id_raw, Some("1234567890".to_string()));

        Ok(())
    }

    #[test]
    fn natural_payload_without_surname_is_rejected() {
        let payload = NaturalUpsert {
            internal: internal("20230101000000000000", "2023-01-01T00:00:00Z"),
            data: natural("  "),
        };

        let result = transform_natural("CH001", &payload);

        assert!(
            matches!(
                result,
                Err(DisqualificationsServiceError::MissingRequiredData)
            ),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[test]
    fn corporate_payload_maps_to_a_corporate_record() -> TestResult {
        let payload = CorporateUpsert {
            internal: internal("20230101000000000000", "2023-01-01T00:00:00Z"),
            data: CorporateDisqualification {
                company_name: "Acme Ltd".to_string(),
                company_registration_number: Some("01234567".to_string()),
                country_of_registration: None,
                disqualifications: Vec::new(),
            },
        };

        let record = transform_corporate("CH002", &payload)?;

        assert_eq!(record.officer_type(), OfficerType::Corporate);
        assert_eq!(record.officer_id, "CH002");

        Ok(())
    }

    #[test]
    fn corporate_payload_without_company_name_is_rejected() {
        let payload = CorporateUpsert {
            internal: internal("20230101000000000000", "2023-01-01T00:00:00Z"),
            data: CorporateDisqualification {
                company_name: String::new(),
                company_registration_number: None,
                country_of_registration: None,
                disqualifications: Vec::new(),
            },
        };

        let result = transform_corporate("CH002", &payload);

        assert!(
            matches!(
                result,
                Err(DisqualificationsServiceError::MissingRequiredData)
            ),
            "expected MissingRequiredData, got {result:?}"
        );
    }
}
