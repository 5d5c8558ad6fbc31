//! Object-created notification payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{AppError, Result, s3_uri};

/// One entry of the notification's `Records` array.
///
/// Only the fields the dispatcher reads are modelled; everything else in
/// the record is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Object {
    pub key: String,
}

/// The object whose creation triggered the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceObject {
    pub bucket: String,
    pub key: String,
}

impl SourceObject {
    /// Extract the source object from the first record of a notification.
    ///
    /// Records after the first are ignored with a warning.
    pub fn from_event(event: &Value) -> Result<Self> {
        let records = event
            .get("Records")
            .ok_or_else(|| AppError::malformed_event("missing 'Records'"))?
            .as_array()
            .ok_or_else(|| AppError::malformed_event("'Records' is not an array"))?;

        let first = records
            .first()
            .ok_or_else(|| AppError::malformed_event("'Records' is empty"))?;

        if records.len() > 1 {
            warn!(
                "Event carries {} records; only the first is processed, {} ignored",
                records.len(),
                records.len() - 1
            );
        }

        let record = S3EventRecord::deserialize(first)
            .map_err(|e| AppError::malformed_event(format!("Records[0]: {}", e)))?;

        Ok(Self {
            bucket: record.s3.bucket.name,
            key: record.s3.object.key,
        })
    }

    /// `s3://bucket/key` form used in logs and errors.
    pub fn uri(&self) -> String {
        s3_uri(&self.bucket, &self.key)
    }

    /// File name of the key without its final extension.
    pub fn base_name(&self) -> &str {
        base_name(&self.key)
    }
}

/// Last path segment of `key` with everything from its last `.` removed.
///
/// `input/report.final.json` gives `report.final`; a segment without a
/// dot is returned whole.
pub fn base_name(key: &str) -> &str {
    let file_name = key.rsplit_once('/').map_or(key, |(_, name)| name);
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(bucket: &str, key: &str) -> Value {
        json!({
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "eventName": "ObjectCreated:Put",
            "s3": {
                "bucket": { "name": bucket, "arn": format!("arn:aws:s3:::{}", bucket) },
                "object": { "key": key, "size": 88 }
            }
        })
    }

    #[test]
    fn test_from_event() {
        let event = json!({ "Records": [record("src", "in/doc.json")] });
        let source = SourceObject::from_event(&event).unwrap();
        assert_eq!(source.bucket, "src");
        assert_eq!(source.key, "in/doc.json");
        assert_eq!(source.uri(), "s3://src/in/doc.json");
    }

    #[test]
    fn test_only_first_record_is_used() {
        let event = json!({
            "Records": [record("src", "a.json"), record("other", "b.json"), { "junk": true }]
        });
        let source = SourceObject::from_event(&event).unwrap();
        assert_eq!(source.bucket, "src");
        assert_eq!(source.key, "a.json");
    }

    #[test]
    fn test_malformed_events() {
        let cases = [
            json!({}),
            json!({ "Records": "nope" }),
            json!({ "Records": [] }),
            json!({ "Records": [{ "s3": { "bucket": { "name": "src" } } }] }),
            json!({ "Records": [{ "s3": { "object": { "key": "k" } } }] }),
            json!({ "Records": [{ "s3": { "bucket": {}, "object": { "key": "k" } } }] }),
        ];
        for event in cases {
            let err = SourceObject::from_event(&event).unwrap_err();
            assert!(matches!(err, AppError::MalformedEvent(_)), "{event}");
        }
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("input/report.final.json"), "report.final");
        assert_eq!(base_name("in/doc.json"), "doc");
        assert_eq!(base_name("doc.json"), "doc");
        assert_eq!(base_name("a/b/README"), "README");
        assert_eq!(base_name("dir.v2/notes"), "notes");
        assert_eq!(base_name("uploads/한국어.json"), "한국어");
    }
}
