use url::Url;

use crate::catalog::Catalog;
use crate::models::{Listing, ListingId};
use crate::search::postcode;

/// Image shown wherever a listing has no picture of its own.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.jpg";

const NO_DESCRIPTION: &str = "No description provided yet.";

const MAPS_SEARCH: &str = "https://www.google.com/maps/search/";

/// Everything a property page shows for one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDetail<'a> {
    pub listing: &'a Listing,
    /// Full size images, never empty
    pub gallery: Vec<String>,
    pub postcode: String,
    pub floorplan: String,
    pub description: String,
    pub price_label: String,
    pub map_link: Url,
}

/// Result of looking up a property page.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a> {
    Found(PropertyDetail<'a>),
    NotFound { id: ListingId },
}

impl<'a> PropertyDetail<'a> {
    pub fn new(listing: &'a Listing) -> Self {
        let images: Vec<String> = listing
            .images
            .iter()
            .filter(|image| !image.trim().is_empty())
            .cloned()
            .collect();
        let gallery = if !images.is_empty() {
            images
        } else {
            vec![present(&listing.picture).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())]
        };

        Self {
            listing,
            gallery,
            postcode: display_postcode(&listing.location),
            floorplan: present(&listing.floorplan)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            description: present(&listing.description)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            price_label: price_label(listing.price),
            map_link: map_link(&listing.location),
        }
    }
}

/// A blank string is as good as missing.
fn present(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

/// The postcode part of a location: from the outward code to the end, or
/// the last word when no outward code is present.
pub fn display_postcode(location: &str) -> String {
    postcode::full_postcode(location).unwrap_or_else(|| {
        location
            .split_whitespace()
            .last()
            .unwrap_or_default()
            .to_string()
    })
}

/// Look up the page for `id`.
pub fn lookup<'a>(catalog: &'a Catalog, id: &ListingId) -> DetailView<'a> {
    match catalog.find(id) {
        Some(listing) => DetailView::Found(PropertyDetail::new(listing)),
        None => DetailView::NotFound { id: id.clone() },
    }
}

/// Outbound maps search for a location.
pub fn map_link(location: &str) -> Url {
    let mut url = Url::parse(MAPS_SEARCH).expect("maps search URL is valid");
    url.query_pairs_mut()
        .append_pair("api", "1")
        .append_pair("query", location);
    url
}

/// `£` and whole pounds with thousands separators, e.g. `£1,250,000`.
pub fn price_label(price: f64) -> String {
    let pounds = price.round().max(0.0) as u64;
    let digits = pounds.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("£{grouped}")
}
