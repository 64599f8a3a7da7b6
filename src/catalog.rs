use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::models::{Listing, ListingId};

/// Listing values from either accepted layout: a bare array, or an object
/// with a `properties` array.
fn listing_values(file: Value) -> Result<Vec<Value>, CatalogError> {
    match file {
        Value::Array(values) => Ok(values),
        Value::Object(mut map) => match map.remove("properties") {
            Some(Value::Array(values)) => Ok(values),
            Some(other) => Err(CatalogError::Layout {
                found: json_kind(&other),
            }),
            None => Err(CatalogError::Layout {
                found: "an object without `properties`",
            }),
        },
        other => Err(CatalogError::Layout {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read-only collection of listings, in the order the data file lists them.
///
/// Loaded once at startup and passed by reference into searches and
/// lookups; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(&listing.id) {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
        }
        Ok(Self { listings })
    }

    /// Parse a catalog from JSON: either a bare array of listings or an
    /// object with a `properties` array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let values = listing_values(serde_json::from_str(json)?)?;
        let listings = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value)
                    .map_err(|source| CatalogError::Listing { index, source })
            })
            .collect::<Result<Vec<Listing>, _>>()?;
        Self::new(listings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!("Reading catalog from {}", path.display());

        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;

        info!("📋 Loaded {} listings from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Find a listing by id. `None` is the "not found" outcome callers
    /// render for stale or unknown ids.
    pub fn find(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// The bundled sample catalog, shared by unit tests.
#[cfg(test)]
pub(crate) fn fixture() -> Catalog {
    Catalog::from_json(include_str!("../data/properties.json")).expect("fixture catalog parses")
}
