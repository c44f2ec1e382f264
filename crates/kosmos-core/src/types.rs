use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Timestamp
// =============================================================================

/// Epoch-seconds timestamp used for turn creation times and event stamps.
///
/// Stored as a plain `i64` so it serializes compactly and compares cheaply;
/// formatting for display goes through [`Timestamp::to_rfc3339`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Capture the current time.
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    /// Format as an ISO 8601 string for display.
    ///
    /// Falls back to the raw epoch value if the timestamp is out of range.
    pub fn to_rfc3339(&self) -> String {
        Utc.timestamp_opt(self.0, 0)
            .single()
            .map(|dt: DateTime<Utc>| dt.to_rfc3339())
            .unwrap_or_else(|| self.0.to_string())
    }
}

// =============================================================================
// Subject
// =============================================================================

/// Science subject a catalog topic belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    /// All subjects in display order.
    pub fn all() -> [Subject; 3] {
        [Subject::Physics, Subject::Chemistry, Subject::Biology]
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
        };
        f.write_str(name)
    }
}

impl FromStr for Subject {
    type Err = crate::error::KosmosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "physics" => Ok(Subject::Physics),
            "chemistry" => Ok(Subject::Chemistry),
            "biology" => Ok(Subject::Biology),
            other => Err(crate::error::KosmosError::Catalog(format!(
                "unknown subject: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Timestamp ----

    #[test]
    fn test_timestamp_now_is_recent() {
        let ts = Timestamp::now();
        let now = Utc::now().timestamp();
        assert!((ts.0 - now).abs() < 2);
    }

    #[test]
    fn test_timestamp_to_rfc3339() {
        let ts = Timestamp(1700000000);
        let s = ts.to_rfc3339();
        assert!(s.starts_with("2023-11-14T"));
    }

    #[test]
    fn test_timestamp_to_rfc3339_out_of_range() {
        let ts = Timestamp(i64::MAX);
        assert_eq!(ts.to_rfc3339(), i64::MAX.to_string());
    }

    #[test]
    fn test_timestamp_serde_transparent() {
        let ts = Timestamp(1700000000);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1700000000");
        let rt: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(rt, ts);
    }

    #[test]
    fn test_timestamp_ordering() {
        assert!(Timestamp(1) < Timestamp(2));
        assert_eq!(Timestamp(5), Timestamp(5));
    }

    // ---- Subject ----

    #[test]
    fn test_subject_display() {
        assert_eq!(Subject::Physics.to_string(), "physics");
        assert_eq!(Subject::Chemistry.to_string(), "chemistry");
        assert_eq!(Subject::Biology.to_string(), "biology");
    }

    #[test]
    fn test_subject_from_str() {
        assert_eq!("physics".parse::<Subject>().unwrap(), Subject::Physics);
        assert_eq!("Chemistry".parse::<Subject>().unwrap(), Subject::Chemistry);
        assert_eq!("BIOLOGY".parse::<Subject>().unwrap(), Subject::Biology);
    }

    #[test]
    fn test_subject_from_str_unknown() {
        let err = "astrology".parse::<Subject>().unwrap_err();
        assert!(err.to_string().contains("unknown subject"));
    }

    #[test]
    fn test_subject_serde_snake_case() {
        let json = serde_json::to_string(&Subject::Physics).unwrap();
        assert_eq!(json, "\"physics\"");
        let rt: Subject = serde_json::from_str("\"biology\"").unwrap();
        assert_eq!(rt, Subject::Biology);
    }

    #[test]
    fn test_subject_all_order() {
        let all = Subject::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], Subject::Physics);
        assert_eq!(all[2], Subject::Biology);
    }
}
