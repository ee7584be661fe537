//! Nested value objects that appear inside response entities.

use serde::{Deserialize, Serialize};

/// Monetary amount with its currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self { amount, currency: currency.into() }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

/// Package dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: String,
}

/// Product image URLs at the sizes the service provides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
}

impl ImageUrl {
    /// Largest available image.
    pub fn best(&self) -> Option<&str> {
        self.large.as_deref().or(self.medium.as_deref()).or(self.small.as_deref())
    }
}

/// Aggregate review statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "totalReviews")]
    pub total_reviews: i64,
}

/// A category node together with its path from the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub path: Vec<String>,
}

impl CategoryInfo {
    /// Path joined with ` > `, e.g. `Electronics > Audio > Headphones`.
    pub fn breadcrumb(&self) -> String {
        self.path.join(" > ")
    }
}
