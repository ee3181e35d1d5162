use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Property;

/// Search parameters for the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free text matched against title or location
    pub query: String,
    /// Location substring
    pub location: Option<String>,
    /// Minimum nightly price
    pub min_price: Option<f64>,
    /// Maximum nightly price
    pub max_price: Option<f64>,
}

impl SearchParams {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_price_range(mut self, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    /// Whether a property passes every filter. Unavailable listings never match.
    pub fn matches(&self, property: &Property) -> bool {
        if !property.availability {
            return false;
        }

        let query = self.query.to_lowercase();
        let title = property.title.to_lowercase();
        let location = property.location.to_lowercase();

        let matches_query = query.is_empty() || title.contains(&query) || location.contains(&query);
        let matches_location = self
            .location
            .as_ref()
            .map_or(true, |wanted| location.contains(&wanted.to_lowercase()));
        let matches_min = self.min_price.map_or(true, |min| property.price >= min);
        let matches_max = self.max_price.map_or(true, |max| property.price <= max);

        matches_query && matches_location && matches_min && matches_max
    }
}

/// Filter a catalog, keeping catalog order
pub fn search(catalog: &[Property], params: &SearchParams) -> Vec<Property> {
    let results: Vec<Property> = catalog
        .iter()
        .filter(|property| params.matches(property))
        .cloned()
        .collect();
    debug!(
        "Search {:?} matched {} of {} properties",
        params.query,
        results.len(),
        catalog.len()
    );
    results
}

/// Result ordering offered by the search page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortKey::Relevance),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "rating" => Ok(SortKey::Rating),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Stable sort; ties keep their input order
pub fn sort(results: &[Property], key: SortKey) -> Vec<Property> {
    let mut sorted = results.to_vec();
    match key {
        SortKey::Relevance => {}
        SortKey::PriceLow => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    sorted
}
