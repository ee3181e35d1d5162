pub mod search;
pub mod seed;

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::CatalogError;
use crate::models::Property;

pub use search::{search, sort, SearchParams, SortKey};
pub use seed::seed_properties;

/// Read-only set of listed properties
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    properties: Vec<Property>,
}

impl CatalogStore {
    /// Build a catalog, rejecting listings with bad prices, ratings or counts
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(properties.len());
        for property in &properties {
            validate(property)?;
            if !seen.insert(property.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: property.id.clone(),
                });
            }
        }
        info!("Loaded catalog with {} properties", properties.len());
        Ok(Self { properties })
    }

    /// Catalog with the built-in listings
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed_properties())
    }

    /// Load a JSON array of properties
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let properties: Vec<Property> = serde_json::from_str(raw)?;
        Self::new(properties)
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }

    pub fn filter_by_host(&self, host_id: &str) -> Vec<Property> {
        self.properties
            .iter()
            .filter(|property| property.host_id == host_id)
            .cloned()
            .collect()
    }

    pub fn search(&self, params: &SearchParams) -> Vec<Property> {
        search(&self.properties, params)
    }

    /// Search, then order by `key`
    pub fn search_sorted(&self, params: &SearchParams, key: SortKey) -> Vec<Property> {
        sort(&self.search(params), key)
    }
}

fn validate(property: &Property) -> Result<(), CatalogError> {
    let invalid = |reason| CatalogError::InvalidProperty {
        id: property.id.clone(),
        reason,
    };
    if property.id.is_empty() {
        return Err(invalid("id must not be empty"));
    }
    if !(property.price.is_finite() && property.price > 0.0) {
        return Err(invalid("price must be positive"));
    }
    if !(0.0..=5.0).contains(&property.rating) {
        return Err(invalid("rating must be within 0..=5"));
    }
    if property.images.is_empty() {
        return Err(invalid("at least one image is required"));
    }
    if property.max_guests == 0 || property.bedrooms == 0 || property.bathrooms == 0 {
        return Err(invalid("room and guest counts must be positive"));
    }
    Ok(())
}
