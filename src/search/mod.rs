pub mod criteria;
pub mod dates;
pub mod engine;
pub mod postcode;
pub mod session;

pub use criteria::{FilterCriteria, FilterInputs, TypeFilter};
pub use engine::filter;
pub use session::SearchSession;
