//! Catalog API response type definitions.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Wrapper for endpoints returning a `posts` array.
#[derive(Debug, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<PostRecord>,
}

/// A published post with an optional primary file and its attachments.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub file_id: Option<i64>,
    pub id: String,
    pub user: String,
    pub service: String,
    pub title: String,
    pub published: String,
    #[serde(default)]
    pub substring: Option<String>,
    #[serde(default, deserialize_with = "empty_object_as_none")]
    pub file: Option<FileRef>,
    #[serde(default)]
    pub attachments: Vec<FileRef>,
}

/// A remote file: display name plus server-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub path: String,
}

/// An entry from the creators index, backing the search command.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatorRecord {
    pub id: String,
    pub name: String,
    pub service: String,
    #[serde(deserialize_with = "unix_timestamp")]
    pub updated: DateTime<Utc>,
}

/// The API encodes "no primary file" as an empty object `{}` rather than
/// null; treat `{}`, null, and an absent field all as `None`.
fn empty_object_as_none<'de, D>(deserializer: D) -> Result<Option<FileRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

/// Creator `updated` arrives as unix seconds, integer or fractional.
fn unix_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = f64::deserialize(deserializer)?;
    let nanos = (seconds.fract() * 1e9) as u32;

    DateTime::from_timestamp(seconds as i64, nanos)
        .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", seconds)))
}
