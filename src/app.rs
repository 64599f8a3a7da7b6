//! State holder a front end drives: catalog, filters and favourites.

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::detail::{self, DetailView};
use crate::error::{Result, StorageError};
use crate::favourites::{
    handle_drop, DropOutcome, DropZone, FavouritesStore, FileStorage, KeyValueStorage,
};
use crate::models::{FavouriteEntry, Listing, ListingId};
use crate::search::{FilterCriteria, SearchSession};

/// Result of a favourite button click on a listing id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteOutcome {
    Added,
    AlreadyFavourite,
    Removed,
    NotFavourite,
    UnknownListing,
}

pub struct App<S> {
    catalog: Catalog,
    session: SearchSession,
    favourites: FavouritesStore<S>,
}

impl App<FileStorage> {
    /// Load the catalog and open file-backed favourites as configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = Catalog::load(&config.catalog.path)?;
        let storage = FileStorage::new(config.storage.dir.clone());
        info!("Favourites stored in {}", storage.dir().display());
        Ok(Self::new(
            catalog,
            FavouritesStore::open_with_key(storage, config.storage.key.clone()),
        ))
    }
}

impl<S: KeyValueStorage> App<S> {
    pub fn new(catalog: Catalog, favourites: FavouritesStore<S>) -> Self {
        Self {
            catalog,
            session: SearchSession::new(),
            favourites,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Stage criteria without changing results.
    pub fn set_pending(&mut self, criteria: FilterCriteria) {
        self.session.set_pending(criteria);
    }

    /// Commit whatever is staged. Returns whether the results changed.
    pub fn apply(&mut self) -> bool {
        let changed = self.session.apply();
        if changed {
            info!(
                "🔍 {} of {} listings match",
                self.results().len(),
                self.catalog.len()
            );
        }
        changed
    }

    /// Stage `criteria` and commit them in one step.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> Vec<&Listing> {
        self.session.set_pending(criteria);
        self.apply();
        self.results()
    }

    pub fn reset_filters(&mut self) {
        self.session.reset();
    }

    /// Listings matching the applied criteria.
    pub fn results(&self) -> Vec<&Listing> {
        self.session.results(self.catalog.listings())
    }

    pub fn favourites(&self) -> &[FavouriteEntry] {
        self.favourites.entries()
    }

    pub fn favourite_count(&self) -> usize {
        self.favourites.len()
    }

    pub fn is_favourite(&self, id: &ListingId) -> bool {
        self.favourites.contains(id)
    }

    /// Save a listing the caller already holds.
    pub fn add_favourite(&mut self, listing: &Listing) -> std::result::Result<bool, StorageError> {
        self.favourites.add(listing)
    }

    /// Save a catalog listing by id.
    pub fn add_favourite_by_id(&mut self, id: &ListingId) -> Result<FavouriteOutcome> {
        let Some(listing) = self.catalog.find(id) else {
            debug!("No listing {} to favourite", id);
            return Ok(FavouriteOutcome::UnknownListing);
        };
        Ok(if self.favourites.add(listing)? {
            FavouriteOutcome::Added
        } else {
            FavouriteOutcome::AlreadyFavourite
        })
    }

    pub fn remove_favourite(&mut self, id: &ListingId) -> Result<FavouriteOutcome> {
        Ok(if self.favourites.remove(id)? {
            FavouriteOutcome::Removed
        } else {
            FavouriteOutcome::NotFavourite
        })
    }

    pub fn clear_favourites(&mut self) -> Result<()> {
        Ok(self.favourites.clear()?)
    }

    /// Dispatch a drag payload dropped on `zone`.
    pub fn drop_on(&mut self, zone: DropZone, payload: &str) -> Result<DropOutcome> {
        Ok(handle_drop(zone, payload, &self.catalog, &mut self.favourites)?)
    }

    pub fn detail(&self, id: &ListingId) -> DetailView<'_> {
        detail::lookup(&self.catalog, id)
    }

    pub fn favourites_store(&self) -> &FavouritesStore<S> {
        &self.favourites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixture;
    use crate::favourites::{DragPayload, MemoryStorage};
    use crate::search::TypeFilter;

    fn app() -> App<MemoryStorage> {
        App::new(fixture(), FavouritesStore::open(MemoryStorage::new()))
    }

    #[test]
    fn test_apply_and_reset() {
        let mut app = app();
        let results = app.apply_filters(FilterCriteria::default().with_type(TypeFilter::Only("Flat".into())));
        assert_eq!(results.len(), 3);

        app.reset_filters();
        assert_eq!(app.results().len(), app.catalog().len());
    }

    #[test]
    fn test_set_pending_keeps_results() {
        let mut app = app();
        app.set_pending(FilterCriteria::default().with_postcode_area("BR5"));
        assert_eq!(app.results().len(), app.catalog().len());
        assert!(app.session().has_unapplied_changes());
    }

    #[test]
    fn test_apply_commits_staged_criteria() {
        let mut app = app();
        app.set_pending(FilterCriteria::default().with_postcode_area("BR5"));

        assert!(app.apply());
        assert!(!app.session().has_unapplied_changes());
        assert_eq!(app.results().len(), 2);

        // Nothing new staged
        assert!(!app.apply());
        assert_eq!(app.results().len(), 2);
    }

    #[test]
    fn test_favourite_by_id() {
        let mut app = app();
        let id = ListingId::from("5");

        assert_eq!(app.add_favourite_by_id(&id).unwrap(), FavouriteOutcome::Added);
        assert_eq!(app.add_favourite_by_id(&id).unwrap(), FavouriteOutcome::AlreadyFavourite);
        assert!(app.is_favourite(&id));
        assert_eq!(
            app.add_favourite_by_id(&ListingId::from("404")).unwrap(),
            FavouriteOutcome::UnknownListing
        );

        assert_eq!(app.remove_favourite(&id).unwrap(), FavouriteOutcome::Removed);
        assert_eq!(app.remove_favourite(&id).unwrap(), FavouriteOutcome::NotFavourite);
        assert_eq!(app.favourite_count(), 0);
    }

    #[test]
    fn test_drop_and_clear() {
        let mut app = app();
        let payload = DragPayload::Add(ListingId::from("4")).encode();

        let outcome = app.drop_on(DropZone::Favourites, &payload).unwrap();
        assert_eq!(outcome, DropOutcome::Added(ListingId::from("4")));
        assert_eq!(app.favourite_count(), 1);

        app.clear_favourites().unwrap();
        assert!(app.favourites().is_empty());
    }

    #[test]
    fn test_detail_not_found() {
        let app = app();
        assert!(matches!(
            app.detail(&ListingId::from("missing")),
            DetailView::NotFound { .. }
        ));
    }
}
