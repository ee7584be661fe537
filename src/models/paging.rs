//! Response envelope shared by every endpoint.

use super::schema::{decode_as, WireSchema};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Cursor information for the next page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paging {
    #[serde(rename = "nextPageId", default, skip_serializing_if = "Option::is_none")]
    pub next_page_id: Option<String>,
    #[serde(rename = "hasMoreRecords")]
    pub has_more_records: bool,
}

impl Paging {
    /// Id to request next, or `None` when there is nothing more to fetch.
    ///
    /// A response claiming more records without handing out an id cannot be
    /// followed; that is treated as the last page.
    pub fn next_page_id(&self) -> Option<&str> {
        match (&self.next_page_id, self.has_more_records) {
            (Some(id), true) if !id.is_empty() => Some(id),
            (_, true) => {
                warn!("response reports more records but carries no nextPageId");
                None
            }
            (_, false) => None,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagedResponse<T> {
    /// Total record count reported by the service, across all pages.
    #[serde(rename = "dataCount")]
    pub data_count: i64,
    pub paging: Paging,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> PagedResponse<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.paging.next_page_id().is_some()
    }

    /// Appends the records of a following page and takes over its cursor.
    /// `data_count` stays as reported by the first page.
    pub fn merge(&mut self, next: PagedResponse<T>) {
        self.data.extend(next.data);
        self.paging = next.paging;
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResponse<U> {
        PagedResponse {
            data_count: self.data_count,
            paging: self.paging,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

impl<T> IntoIterator for PagedResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Decodes a response envelope whose items follow schema `T`.
pub fn decode_page<T>(value: Value) -> Result<PagedResponse<T>>
where
    T: DeserializeOwned + WireSchema,
{
    decode_as(&format!("PagedResponse<{}>", T::NAME), value)
}
