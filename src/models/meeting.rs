use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Known meeting lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingStatus {
    Completed,
    Upcoming,
    Cancelled,
}

impl MeetingStatus {
    /// Parse a raw status string. `None` for anything outside the known
    /// set - unknown values are tolerated, the validator only warns.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(MeetingStatus::Completed),
            "upcoming" => Some(MeetingStatus::Upcoming),
            "cancelled" => Some(MeetingStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetingStatus::Completed => write!(f, "completed"),
            MeetingStatus::Upcoming => write!(f, "upcoming"),
            MeetingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// One council meeting record.
///
/// The required fields (`date`, `status`, `attendance`, `motions`) are
/// modelled as `Option` so that a missing field surfaces as a validation
/// failure naming the field, not as an opaque decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub date: Option<String>,
    pub status: Option<String>,
    pub attendance: Option<Value>,
    pub motions: Option<Vec<Motion>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Meeting {
    /// The known status, if the raw string is one of the known values.
    pub fn status_kind(&self) -> Option<MeetingStatus> {
        self.status.as_deref().and_then(MeetingStatus::parse)
    }

    /// Sort key for date ordering: RFC 3339 first, then plain `%Y-%m-%d`
    /// at midnight UTC. Anything else yields `None` and sorts as oldest.
    pub fn date_key(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

/// One agenda item voted on during a meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub title: Option<String>,
    pub description: Option<String>,
    pub votes: Option<Vec<Value>>,
    pub result: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meeting_with_date(date: &str) -> Meeting {
        Meeting {
            date: Some(date.to_string()),
            status: Some("completed".to_string()),
            attendance: Some(Value::Null),
            motions: Some(vec![]),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_status_parse_known_values() {
        assert_eq!(MeetingStatus::parse("completed"), Some(MeetingStatus::Completed));
        assert_eq!(MeetingStatus::parse("upcoming"), Some(MeetingStatus::Upcoming));
        assert_eq!(MeetingStatus::parse("cancelled"), Some(MeetingStatus::Cancelled));
        assert_eq!(MeetingStatus::parse("postponed"), None);
        // Case-sensitive, like the documents themselves
        assert_eq!(MeetingStatus::parse("Completed"), None);
    }

    #[test]
    fn test_date_key_plain_date() {
        let key = meeting_with_date("2024-03-12").date_key().unwrap();
        assert_eq!(key, Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_date_key_rfc3339() {
        let key = meeting_with_date("2024-03-12T19:00:00-05:00").date_key().unwrap();
        assert_eq!(key, Utc.with_ymd_and_hms(2024, 3, 13, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_date_key_unparseable() {
        assert!(meeting_with_date("next tuesday").date_key().is_none());
        assert!(meeting_with_date("").date_key().is_none());
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let meeting: Meeting = serde_json::from_value(serde_json::json!({
            "date": "2024-03-12",
            "status": "upcoming",
            "attendance": [],
            "motions": [],
            "location": "town hall"
        }))
        .unwrap();
        assert_eq!(meeting.extra["location"], "town hall");
    }
}
