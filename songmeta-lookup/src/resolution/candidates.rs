//! Candidate recordings returned by a recording search
//!
//! Search results are sparsely populated and loosely typed. Deserialization
//! only checks presence: a missing or wrong-typed scalar becomes `None`, a
//! missing or non-array list becomes empty, and list elements of the wrong
//! shape are dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Deserialized recording search response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    /// Candidates in the order the service ranked them
    #[serde(default, deserialize_with = "lenient_vec")]
    pub recordings: Vec<CandidateRecording>,
}

impl SearchResponse {
    /// Parse a response body
    ///
    /// Fails only when the body is not a JSON document of the right shape.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

/// One possible match for the queried song
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CandidateRecording {
    /// Recording length in milliseconds
    #[serde(rename = "length", default, deserialize_with = "lenient_opt")]
    pub duration_ms: Option<u64>,
    /// Albums/issues the recording appeared on
    #[serde(default, deserialize_with = "lenient_vec")]
    pub releases: Vec<CandidateRelease>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub tags: Vec<Tag>,
}

/// One album/issue under which a recording was published
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CandidateRelease {
    /// Release title; blank titles are treated as absent
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    /// Free-form date: "YYYY", "YYYY-MM" or "YYYY-MM-DD"
    #[serde(default, deserialize_with = "lenient_opt")]
    pub date: Option<String>,
}

/// Free-text genre-like label
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTag")]
pub struct Tag {
    pub name: String,
}

#[derive(Deserialize)]
struct RawTag {
    name: String,
}

impl TryFrom<RawTag> for Tag {
    type Error = String;

    fn try_from(raw: RawTag) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err("blank tag name".to_string());
        }
        Ok(Tag { name: raw.name })
    }
}

/// Accept only arrays; keep the elements that deserialize
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            debug!(value = %other, "Expected an array in search response, treating as empty");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!(error = %e, "Dropping malformed search result element");
                None
            }
        })
        .collect())
}

/// Wrong-typed values become `None`
fn lenient_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = lenient_opt(deserializer)?;
    Ok(text.filter(|t| !t.trim().is_empty()))
}
