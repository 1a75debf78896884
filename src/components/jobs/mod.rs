//! Job role catalog: text search, family filter and role details.

mod component;
pub mod search;

pub use component::JobsPage;
pub use search::{JobQuery, family_stats, learning_path, search_roles};
