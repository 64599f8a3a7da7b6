use tracing::debug;

use super::criteria::FilterCriteria;
use super::{dates, postcode};
use crate::models::Listing;

/// Whether one listing satisfies every criterion.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if !criteria.property_type.matches(&listing.property_type) {
        return false;
    }
    if criteria.min_price.is_some_and(|min| listing.price < min) {
        return false;
    }
    if criteria.max_price.is_some_and(|max| listing.price > max) {
        return false;
    }
    if criteria
        .min_beds
        .is_some_and(|min| f64::from(listing.bedrooms) < min)
    {
        return false;
    }
    if let Some(area) = &criteria.postcode_area {
        if !postcode::matches_area(&listing.location, area) {
            return false;
        }
    }

    if criteria.has_date_bounds() {
        // An undated listing can't be placed inside any range.
        let Some(added) = dates::normalize(listing.added.as_ref()) else {
            return false;
        };
        if criteria.date_from.as_deref().is_some_and(|from| added.as_str() < from) {
            return false;
        }
        if criteria.date_to.as_deref().is_some_and(|to| added.as_str() > to) {
            return false;
        }
    }

    true
}

/// Listings that satisfy `criteria`, in catalog order.
pub fn filter<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    let results: Vec<&Listing> = listings
        .iter()
        .filter(|listing| matches(listing, criteria))
        .collect();

    debug!("Filter kept {} of {} listings", results.len(), listings.len());
    results
}
