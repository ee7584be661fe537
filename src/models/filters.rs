//! Outbound filter value objects: ranges, text and list filters, date
//! ranges, sorting and page cursors.

use super::enums::{SortOrder, TextFilterType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive numeric range. An unset bound is unbounded and is left out of
/// the wire payload entirely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<T>,
}

/// Integer range; bounds serialize without a fractional part.
pub type IntRange = Range<i64>;

/// Decimal range; bounds serialize as JSON floats.
pub type DecimalRange = Range<f64>;

impl<T> Range<T> {
    /// Range with only a lower bound.
    pub fn at_least(min: T) -> Self {
        Self { min: Some(min), max: None }
    }

    /// Range with only an upper bound.
    pub fn at_most(max: T) -> Self {
        Self { min: None, max: Some(max) }
    }

    /// Range with both bounds.
    pub fn between(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Returns true if neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Pattern match against a text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFilter {
    /// Match mode; the server default applies when unset.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TextFilterType>,
    #[serde(rename = "filter")]
    pub pattern: String,
}

impl TextFilter {
    /// Filter using the server's default match mode.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { mode: None, pattern: pattern.into() }
    }

    pub fn with_mode(mode: TextFilterType, pattern: impl Into<String>) -> Self {
        Self { mode: Some(mode), pattern: pattern.into() }
    }

    pub fn contains(pattern: impl Into<String>) -> Self {
        Self::with_mode(TextFilterType::Contains, pattern)
    }

    pub fn exact(pattern: impl Into<String>) -> Self {
        Self::with_mode(TextFilterType::Exact, pattern)
    }

    pub fn starts_with(pattern: impl Into<String>) -> Self {
        Self::with_mode(TextFilterType::StartsWith, pattern)
    }

    pub fn ends_with(pattern: impl Into<String>) -> Self {
        Self::with_mode(TextFilterType::EndsWith, pattern)
    }
}

impl From<&str> for TextFilter {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for TextFilter {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

/// Membership test: the field must equal one of `values`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListFilter {
    #[serde(rename = "filter")]
    pub values: Vec<String>,
}

impl ListFilter {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { values: values.into_iter().map(Into::into).collect() }
    }
}

impl<S: Into<String>> FromIterator<S> for ListFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for ListFilter {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

/// Time window for history requests. Each bound is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start: Some(start), end: Some(end) }
    }

    pub fn since(start: DateTime<Utc>) -> Self {
        Self { start: Some(start), end: None }
    }

    pub fn until(end: DateTime<Utc>) -> Self {
        Self { start: None, end: Some(end) }
    }
}

/// Server-side ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl SortOptions {
    pub fn ascending(by: impl Into<String>) -> Self {
        Self { by: Some(by.into()), order: Some(SortOrder::Ascending) }
    }

    pub fn descending(by: impl Into<String>) -> Self {
        Self { by: Some(by.into()), order: Some(SortOrder::Descending) }
    }
}

/// Outbound page cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageOptions {
    /// Opaque id taken from a previous response's `nextPageId`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

impl PageOptions {
    pub fn size(size: i64) -> Self {
        Self { id: None, size: Some(size) }
    }

    pub fn after(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), size: None }
    }
}
