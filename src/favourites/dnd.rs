//! Drag-and-drop between the results list and the favourites panel.
//!
//! A drag carries a [`DragPayload`] encoded as JSON text. Each
//! [`DropZone`] accepts one intent; anything else dropped on it is
//! ignored without error, since any draggable element can be dropped
//! anywhere.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::storage::KeyValueStorage;
use super::store::FavouritesStore;
use crate::catalog::Catalog;
use crate::error::StorageError;
use crate::models::ListingId;

/// What a drag wants to happen when dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "id", rename_all = "lowercase")]
pub enum DragPayload {
    /// A result card dragged towards favourites
    Add(ListingId),
    /// A favourite dragged out of the panel
    Remove(ListingId),
}

impl DragPayload {
    pub fn encode(&self) -> String {
        // Two-field enum, serializing cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// `None` for anything that isn't a payload this module produced.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw.trim()).ok()
    }
}

/// Where something can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    /// Favourites panel, accepts [`DragPayload::Add`]
    Favourites,
    /// Results area, accepts [`DragPayload::Remove`]
    Results,
}

impl DropZone {
    /// The id to act on, if this zone takes the payload's intent.
    pub fn accepts<'a>(&self, payload: &'a DragPayload) -> Option<&'a ListingId> {
        match (self, payload) {
            (DropZone::Favourites, DragPayload::Add(id)) => Some(id),
            (DropZone::Results, DragPayload::Remove(id)) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Malformed,
    WrongZone,
    UnknownListing,
}

/// What a drop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Added(ListingId),
    AlreadyFavourite(ListingId),
    Removed(ListingId),
    NotFavourite(ListingId),
    Ignored(IgnoreReason),
}

/// Apply a raw drop to the favourites store.
///
/// Payload problems come back as [`DropOutcome::Ignored`]; only a failed
/// storage write is an error.
pub fn handle_drop<S: KeyValueStorage>(
    zone: DropZone,
    raw: &str,
    catalog: &Catalog,
    favourites: &mut FavouritesStore<S>,
) -> Result<DropOutcome, StorageError> {
    let Some(payload) = DragPayload::decode(raw) else {
        debug!(?zone, "Ignoring malformed drop payload");
        return Ok(DropOutcome::Ignored(IgnoreReason::Malformed));
    };
    let Some(id) = zone.accepts(&payload) else {
        debug!(?zone, ?payload, "Ignoring drop on the wrong zone");
        return Ok(DropOutcome::Ignored(IgnoreReason::WrongZone));
    };

    match &payload {
        DragPayload::Add(_) => {
            let Some(listing) = catalog.find(id) else {
                debug!("Ignoring drop of unknown listing {}", id);
                return Ok(DropOutcome::Ignored(IgnoreReason::UnknownListing));
            };
            if favourites.add(listing)? {
                Ok(DropOutcome::Added(id.clone()))
            } else {
                Ok(DropOutcome::AlreadyFavourite(id.clone()))
            }
        }
        DragPayload::Remove(_) => {
            if favourites.remove(id)? {
                Ok(DropOutcome::Removed(id.clone()))
            } else {
                Ok(DropOutcome::NotFavourite(id.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixture;
    use crate::favourites::storage::MemoryStorage;

    fn add(id: &str) -> String {
        DragPayload::Add(ListingId::from(id)).encode()
    }

    fn remove(id: &str) -> String {
        DragPayload::Remove(ListingId::from(id)).encode()
    }

    #[test]
    fn test_payload_encoding() {
        assert_eq!(add("3"), r#"{"intent":"add","id":"3"}"#);
        assert_eq!(
            DragPayload::decode(r#"{"intent":"remove","id":7}"#),
            Some(DragPayload::Remove(ListingId::from("7")))
        );
    }

    #[test]
    fn test_decode_rejects_junk() {
        for raw in ["", "fav:3", "{}", r#"{"intent":"move","id":"3"}"#, r#"{"intent":"add"}"#] {
            assert_eq!(DragPayload::decode(raw), None, "{raw}");
        }
    }

    #[test]
    fn test_zones_accept_one_intent() {
        let add = DragPayload::Add(ListingId::from("1"));
        let remove = DragPayload::Remove(ListingId::from("1"));
        assert!(DropZone::Favourites.accepts(&add).is_some());
        assert!(DropZone::Favourites.accepts(&remove).is_none());
        assert!(DropZone::Results.accepts(&remove).is_some());
        assert!(DropZone::Results.accepts(&add).is_none());
    }

    #[test]
    fn test_drop_add_then_remove() {
        let catalog = fixture();
        let mut store = FavouritesStore::open(MemoryStorage::new());

        let outcome = handle_drop(DropZone::Favourites, &add("2"), &catalog, &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::Added(ListingId::from("2")));
        assert!(store.contains(&ListingId::from("2")));

        let outcome = handle_drop(DropZone::Favourites, &add("2"), &catalog, &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::AlreadyFavourite(ListingId::from("2")));
        assert_eq!(store.len(), 1);

        let outcome = handle_drop(DropZone::Results, &remove("2"), &catalog, &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::Removed(ListingId::from("2")));
        assert!(store.is_empty());

        let outcome = handle_drop(DropZone::Results, &remove("2"), &catalog, &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::NotFavourite(ListingId::from("2")));
    }

    #[test]
    fn test_mismatched_and_malformed_drops_are_ignored() {
        let catalog = fixture();
        let mut store = FavouritesStore::open(MemoryStorage::new());
        store.add(&catalog.listings()[0]).unwrap();

        let outcome = handle_drop(DropZone::Results, &add("2"), &catalog, &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::Ignored(IgnoreReason::WrongZone));

        let outcome = handle_drop(DropZone::Favourites, &remove("1"), &catalog, &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::Ignored(IgnoreReason::WrongZone));

        let outcome = handle_drop(DropZone::Favourites, "fav:2", &catalog, &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::Ignored(IgnoreReason::Malformed));

        let outcome = handle_drop(DropZone::Favourites, &add("999"), &catalog, &mut store).unwrap();
        assert_eq!(outcome, DropOutcome::Ignored(IgnoreReason::UnknownListing));

        assert_eq!(store.len(), 1);
        assert!(store.contains(&ListingId::from("1")));
    }
}
