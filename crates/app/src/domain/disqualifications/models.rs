//! Disqualification models.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::disqualifications::delta::DeltaAt;

/// Record variant discriminator. Natural and corporate officers share one
/// identity space; an officer id resolves to at most one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfficerType {
    Natural,
    Corporate,
}

impl OfficerType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Corporate => "corporate",
        }
    }
}

impl Display for OfficerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Officer type string was not `natural` or `corporate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown officer type")]
pub struct UnknownOfficerType;

impl FromStr for OfficerType {
    type Err = UnknownOfficerType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("natural") {
            Ok(Self::Natural)
        } else if s.eq_ignore_ascii_case("corporate") {
            Ok(Self::Corporate)
        } else {
            Err(UnknownOfficerType)
        }
    }
}

/// Unified disqualification record stored against one officer id.
///
/// `created_at` is set once at the first accepted write and carried forward
/// unchanged by every later accepted update; `updated_at` reflects the write
/// that produced the current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisqualificationRecord {
    pub officer_id: String,
    pub delta_at: DeltaAt,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Officer id exactly as supplied by the upstream feed, before any
    /// normalisation, kept for traceability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub officer_id_raw: Option<String>,
    pub data: DisqualificationData,
}

impl DisqualificationRecord {
    #[must_use]
    pub fn officer_type(&self) -> OfficerType {
        self.data.officer_type()
    }
}

/// Variant payloads as a tagged union; exactly one discriminator per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "officer_type", rename_all = "lowercase")]
pub enum DisqualificationData {
    Natural(NaturalDisqualification),
    Corporate(CorporateDisqualification),
}

impl DisqualificationData {
    #[must_use]
    pub fn officer_type(&self) -> OfficerType {
        match self {
            Self::Natural(_) => OfficerType::Natural,
            Self::Corporate(_) => OfficerType::Corporate,
        }
    }
}

/// Natural person disqualification payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturalDisqualification {
    pub surname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default)]
    pub disqualifications: Vec<DisqualificationPeriod>,
}

/// Corporate body disqualification payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateDisqualification {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_registration: Option<String>,
    #[serde(default)]
    pub disqualifications: Vec<DisqualificationPeriod>,
}

/// One disqualification period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisqualificationPeriod {
    pub disqualified_from: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disqualified_until: Option<Date>,
    pub disqualification_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_name: Option<String>,
}

/// Internal metadata carried on every inbound upsert, separate from the
/// externally visible data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalUpsertData {
    pub delta_at: DeltaAt,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub officer_id_raw: Option<String>,
}

/// Inbound natural upsert payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturalUpsert {
    pub internal: InternalUpsertData,
    pub data: NaturalDisqualification,
}

/// Inbound corporate upsert payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateUpsert {
    pub internal: InternalUpsertData,
    pub data: CorporateDisqualification,
}

/// Parameters of a delete request. `officer_type` arrives as the raw path
/// segment and is validated before the store is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequestParameters {
    pub context_id: String,
    pub officer_type: String,
    pub officer_id: String,
    pub request_delta_at: DeltaAt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn officer_type_parses_case_insensitively() {
        assert_eq!("natural".parse(), Ok(OfficerType::Natural));
        assert_eq!("NATURAL".parse(), Ok(OfficerType::Natural));
        assert_eq!("Corporate".parse(), Ok(OfficerType::Corporate));
    }

    #[test]
    fn officer_type_rejects_unknown_values() {
        assert_eq!("invalid".parse::<OfficerType>(), Err(UnknownOfficerType));
        assert_eq!("".parse::<OfficerType>(), Err(UnknownOfficerType));
    }

    #[test]
    fn data_union_tags_the_discriminator() {
        let data = DisqualificationData::Natural(NaturalDisqualification {
            surname: "Smith".to_string(),
            forename: None,
            title: None,
            date_of_birth: None,
            nationality: None,
            disqualifications: Vec::new(),
        });

        let json = serde_json::to_value(&data).expect("serialize");

        assert_eq!(json["officer_type"], "natural");
        assert_eq!(json["surname"], "Smith");
    }

    #[test]
    fn data_union_round_trips_through_json() {
        let data = DisqualificationData::Corporate(CorporateDisqualification {
            company_name: "Acme Ltd".to_string(),
            company_registration_number: Some("01234567".to_string()),
            country_of_registration: None,
            disqualifications: Vec::new(),
        });

        let json = serde_json::to_string(&data).expect("serialize");
        let parsed: DisqualificationData = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(parsed, data);
    }
}
