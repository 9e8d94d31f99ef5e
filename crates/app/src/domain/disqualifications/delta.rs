//! Delta timestamp ordering.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Opaque ordering marker supplied by the upstream delta feed.
///
/// The feed emits fixed-width zero-padded UTC digit strings
/// (`yyyyMMddHHmmssSSSSSS`), so lexicographic order and chronological order
/// agree; `Ord` is plain string comparison, and the matching SQL text
/// comparison in the repository relies on the same property. A feed format
/// change would be absorbed here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeltaAt(String);

impl DeltaAt {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DeltaAt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<&str> for DeltaAt {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_delta_orders_after_earlier_delta() {
        let earlier = DeltaAt::new("20230101000000000000");
        let later = DeltaAt::new("20240101000000000000");

        assert!(earlier < later, "expected {earlier} to sort before {later}");
    }

    #[test]
    fn equal_deltas_compare_equal() {
        let a = DeltaAt::new("20240925171003950844");
        let b = DeltaAt::new("20240925171003950844");

        assert_eq!(a, b);
    }

    #[test]
    fn serde_is_transparent() {
        let delta = DeltaAt::new("20240925171003950844");

        let json = serde_json::to_string(&delta).expect("serialize");

        assert_eq!(json, "\"20240925171003950844\"");
    }
}
