use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The latest output content and its modification time, as served by the poll endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputSnapshot {
    pub content: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Wire shape of `GET /api/output`. Both fields are optional on the wire.
#[derive(Debug, Deserialize)]
struct OutputPayload {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    updated_at: Option<Value>,
}

impl OutputSnapshot {
    pub fn new(content: impl Into<String>, updated_at: Option<DateTime<Utc>>) -> Self {
        Self { content: content.into(), updated_at }
    }

    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let payload: OutputPayload = serde_json::from_str(body)?;
        Ok(Self {
            content: payload.content.unwrap_or_default(),
            updated_at: payload.updated_at.as_ref().and_then(parse_timestamp),
        })
    }
}

/// Accepts RFC 3339, naive ISO date-times (local time), bare dates (UTC),
/// or epoch milliseconds. Null, empty, zero and garbage all mean "no timestamp".
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let millis = n.as_f64()?;
            if !millis.is_finite() || millis == 0.0 {
                return None;
            }
            DateTime::from_timestamp_millis(millis as i64)
        }
        Value::String(s) => parse_timestamp_str(s.trim()),
        _ => None,
    }
}

fn parse_timestamp_str(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Body of `POST /api/input`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRequest {
    pub command: String,
}

impl CommandRequest {
    /// Trims the raw field value. Blank input yields no request at all.
    pub fn from_input(raw: &str) -> Option<Self> {
        let command = raw.trim();
        if command.is_empty() {
            return None;
        }
        Some(Self { command: command.to_string() })
    }
}
