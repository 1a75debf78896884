//! Page-level views.

pub mod jobs;
pub mod roadmap;
pub mod salary;
