mod lenient;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a listing.
///
/// Catalog data uses both numbers and strings for ids, so both are
/// normalized to their textual form: `7` and `"7"` are the same listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "lenient::RawId")]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ListingId> for String {
    fn from(id: ListingId) -> Self {
        id.0
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// When a listing was put on the market, as written in the catalog.
///
/// Every part may be missing; see [`crate::search::dates`] for how this
/// becomes a comparable date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddedDate {
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub day: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub month: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub year: Option<i32>,
}

/// Core listing data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(deserialize_with = "lenient::bedrooms")]
    pub bedrooms: u32,
    #[serde(deserialize_with = "lenient::price")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floorplan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<AddedDate>,
    /// Fields the catalog carries that search does not look at (tenure,
    /// agent details, ...). Kept so favourites snapshot the whole record.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A listing as it looked when the user saved it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavouriteEntry(Listing);

impl FavouriteEntry {
    pub fn snapshot(listing: &Listing) -> Self {
        Self(listing.clone())
    }

    pub fn id(&self) -> &ListingId {
        &self.0.id
    }

    pub fn listing(&self) -> &Listing {
        &self.0
    }
}
