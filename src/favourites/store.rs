use tracing::{debug, info, warn};

use super::storage::KeyValueStorage;
use crate::error::StorageError;
use crate::models::{FavouriteEntry, Listing, ListingId};

/// Default storage key for the favourites list.
pub const FAVOURITES_KEY: &str = "favourites";

/// Read the persisted favourites. Never fails: a missing slot, unreadable
/// storage, bad JSON or a non-array value all read as an empty list.
/// Individual entries that no longer parse are dropped; the rest load.
pub fn load<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<FavouriteEntry> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Could not read favourites, starting empty");
            return Vec::new();
        }
    };

    let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(error = %e, "Discarding unreadable favourites");
            return Vec::new();
        }
    };

    let total = values.len();
    let entries: Vec<FavouriteEntry> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable favourite");
                None
            }
        })
        .collect();

    if entries.len() < total {
        warn!(
            skipped = total - entries.len(),
            kept = entries.len(),
            "Some saved favourites could not be read"
        );
    }
    entries
}

/// Saved listings, newest first, mirrored to storage after every change.
#[derive(Debug)]
pub struct FavouritesStore<S> {
    storage: S,
    key: String,
    entries: Vec<FavouriteEntry>,
}

impl<S: KeyValueStorage> FavouritesStore<S> {
    /// Hydrate from the default `favourites` slot.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, FAVOURITES_KEY)
    }

    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = load(&storage, &key);
        debug!("Loaded {} favourites from '{}'", entries.len(), key);
        Self {
            storage,
            key,
            entries,
        }
    }

    pub fn entries(&self) -> &[FavouriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &ListingId) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }

    /// Save a snapshot of `listing` at the front. Returns `false` without
    /// touching storage if it is already saved.
    pub fn add(&mut self, listing: &Listing) -> Result<bool, StorageError> {
        if self.contains(&listing.id) {
            debug!("Listing {} already in favourites", listing.id);
            return Ok(false);
        }

        self.entries.insert(0, FavouriteEntry::snapshot(listing));
        info!("⭐ Added listing {} to favourites", listing.id);
        self.persist()?;
        Ok(true)
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: &ListingId) -> Result<bool, StorageError> {
        let Some(index) = self.entries.iter().position(|entry| entry.id() == id) else {
            debug!("Listing {} not in favourites", id);
            return Ok(false);
        };

        self.entries.remove(index);
        info!("Removed listing {} from favourites", id);
        self.persist()?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        info!("Cleared favourites");
        self.persist()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries)?;
        self.storage.set(&self.key, &json)
    }
}
