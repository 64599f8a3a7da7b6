pub mod dnd;
pub mod storage;
pub mod store;

pub use dnd::{handle_drop, DragPayload, DropOutcome, DropZone, IgnoreReason};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{FavouritesStore, FAVOURITES_KEY};
