//! Wire types for the link service API

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUrlRequest {
    pub url: String,
}

/// One entry of the user's link list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlRecord {
    pub code: String,
    pub short_url: String,
    #[serde(rename = "url")]
    pub original_url: String,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

impl ShortUrlRecord {
    pub fn created_display(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Result of `POST /api/urls`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedShortUrl {
    #[serde(flatten)]
    pub record: ShortUrlRecord,
    /// The service matched an earlier submission instead of creating a record
    #[serde(default)]
    pub existed: bool,
}

/// Error body of a non-2xx response.
///
/// Framework-generated errors (e.g. request validation) carry `error`
/// without `code`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub checks: BTreeMap<String, String>,
}

impl HealthReport {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// `createdAt` handling.
///
/// The service writes zone-less local time (`2025-01-31T09:15:00`). RFC 3339
/// with an offset is accepted too and converted to UTC wall time.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt);
        }
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.naive_utc())
    }

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(WIRE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_token_request_uses_camel_case() {
        let body = serde_json::to_value(TokenRequest {
            user_id: "abc123".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"userId": "abc123"}));
    }

    #[test]
    fn test_created_short_url_from_service_json() {
        let json = r#"{
            "code": "k3x9q2",
            "shortUrl": "http://sho.rt/k3x9q2",
            "url": "https://example.com/x",
            "createdAt": "2025-03-04T05:06:07",
            "existed": true
        }"#;
        let created: CreatedShortUrl = serde_json::from_str(json).unwrap();
        assert!(created.existed);
        assert_eq!(created.record.code, "k3x9q2");
        assert_eq!(created.record.original_url, "https://example.com/x");
        assert_eq!(created.record.created_at.month(), 3);
        assert_eq!(created.record.created_at.second(), 7);
    }

    #[test]
    fn test_list_item_without_existed() {
        let json = r#"[{"code":"a","shortUrl":"s","url":"u","createdAt":"2025-01-01T00:00:00"}]"#;
        let records: Vec<ShortUrlRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].created_display(), "2025-01-01 00:00:00");
    }

    #[test]
    fn test_timestamp_variants() {
        let frac = timestamp::parse("2025-06-15T12:30:00.123456").unwrap();
        assert_eq!(frac.hour(), 12);

        let rfc = timestamp::parse("2025-06-15T12:30:00+02:00").unwrap();
        assert_eq!(rfc.hour(), 10);
        assert_eq!(rfc.day(), 15);

        assert!(timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_bad_timestamp_fails_whole_record() {
        let json = r#"{"code":"a","shortUrl":"s","url":"u","createdAt":"nope"}"#;
        assert!(serde_json::from_str::<ShortUrlRecord>(json).is_err());
    }

    #[test]
    fn test_health_report() {
        let json = r#"{"status":"failed","checks":{"mysql":"ok","redis":"failed"}}"#;
        let report: HealthReport = serde_json::from_str(json).unwrap();
        assert!(!report.is_ok());
        assert_eq!(report.checks.get("redis").map(String::as_str), Some("failed"));
    }
}
