use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{KeyValuePair, Status};

/// Name, description and metadata of a list, sent to create or update it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMetadata {
    /// Name of the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<String, String>,
}

impl ListMetadata {
    /// Creates metadata for a named list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// An image list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageList {
    /// Id of the list.
    pub id: Option<i32>,
    /// Name of the list.
    pub name: Option<String>,
    /// Description of the list.
    pub description: Option<String>,
    /// Metadata of the list.
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

/// A term list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TermList {
    /// Id of the list.
    pub id: Option<i32>,
    /// Name of the list.
    pub name: Option<String>,
    /// Description of the list.
    pub description: Option<String>,
    /// Metadata of the list.
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

/// An image added to a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    /// Id of the image in the list.
    pub content_id: Option<String>,
    /// Tags and labels.
    #[serde(default)]
    pub additional_info: Vec<KeyValuePair>,
    /// Processing status.
    pub status: Option<Status>,
    /// Tracking id.
    pub tracking_id: Option<String>,
}

/// Ids of the images of a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageIds {
    /// Id of the list.
    pub content_source: Option<String>,
    /// Ids of the images.
    #[serde(default)]
    pub content_ids: Vec<i32>,
    /// Processing status.
    pub status: Option<Status>,
    /// Tracking id.
    pub tracking_id: Option<String>,
}

/// Result of a list index refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RefreshIndex {
    /// Id of the list.
    pub content_source_id: Option<String>,
    /// True when the index was rebuilt.
    pub is_update_success: Option<bool>,
    /// Advanced info.
    #[serde(default)]
    pub advanced_info: Vec<IndexMap<String, String>>,
    /// Processing status.
    pub status: Option<Status>,
    /// Tracking id.
    pub tracking_id: Option<String>,
}

/// A term of a term list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TermsInList {
    /// The term.
    pub term: Option<String>,
}

/// The terms of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TermsData {
    /// Language of the terms.
    pub language: Option<String>,
    /// The terms.
    #[serde(default)]
    pub terms: Vec<TermsInList>,
    /// Processing status.
    pub status: Option<Status>,
    /// Tracking id.
    pub tracking_id: Option<String>,
}

/// Paging of a term page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TermsPaging {
    /// Total number of terms.
    pub total: Option<i32>,
    /// Page size.
    pub limit: Option<i32>,
    /// Offset of the page.
    pub offset: Option<i32>,
    /// Number of terms returned.
    pub returned: Option<i32>,
}

/// A page of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Terms {
    /// The terms.
    pub data: Option<TermsData>,
    /// The paging.
    pub paging: Option<TermsPaging>,
}

impl Terms {
    /// Iterates over the terms of the page.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.data
            .iter()
            .flat_map(|data| &data.terms)
            .filter_map(|term| term.term.as_deref())
    }

    /// Offset of the next page, if any.
    pub fn next_offset(&self) -> Option<i32> {
        let TermsPaging {
            total,
            offset,
            returned,
            ..
        } = self.paging?;
        let next = offset? + returned?;
        (returned? > 0 && next < total?).then_some(next)
    }
}
