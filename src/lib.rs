//! Property catalog search with a two-step (pending, then applied) filter
//! model and a persisted favourites list.
//!
//! The [`App`] type wires the pieces together for a front end; each piece
//! is usable on its own.

pub mod app;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod favourites;
pub mod models;
pub mod search;

pub use app::{App, FavouriteOutcome};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use models::{AddedDate, FavouriteEntry, Listing, ListingId};
