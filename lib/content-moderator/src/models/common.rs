use serde::{Deserialize, Serialize};

/// A key/value pair, used for metadata, tags and advanced info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyValuePair {
    /// The key.
    pub key: Option<String>,
    /// The value.
    pub value: Option<String>,
}

impl KeyValuePair {
    /// Creates a pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// Processing status reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Status {
    /// Status code.
    pub code: Option<i32>,
    /// Status description.
    pub description: Option<String>,
    /// Exception, if any.
    pub exception: Option<String>,
}

/// Reference to remote content, sent instead of the content itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BodyModel {
    /// How the value is represented, `URL` for an image URL.
    pub data_representation: String,
    /// The value.
    pub value: String,
}

impl BodyModel {
    /// An image referenced by URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            data_representation: "URL".to_string(),
            value: url.into(),
        }
    }
}
