//! Roadmap view: category filter, level ordering and zig-zag path layout.
//!
//! Data flows one way:
//! - the node table is filtered by the selected [`DomainFilter`](crate::catalog::DomainFilter)
//! - the working set is stably sorted by level
//! - [`Layout`] turns ranks into positions and a cubic Bezier path
//! - the resulting [`RenderFrame`] is drawn as SVG
//!
//! [`RoadmapView`] runs that chain synchronously on every event. Selection
//! lives alongside it and is dropped whenever the selected node leaves the
//! working set.
//!
//! # Example
//!
//! ```
//! use cyber_atlas::catalog::{Catalog, DomainFilter, Domain};
//! use cyber_atlas::components::roadmap::{RoadmapView, ViewportClass};
//!
//! let catalog = Catalog::load().unwrap();
//! let mut view = RoadmapView::new(catalog.roadmap(), ViewportClass::Wide);
//! view.set_filter(DomainFilter::Only(Domain::Cloud));
//! assert!(!view.frame().path.is_empty());
//! ```

mod component;
pub mod filter;
pub mod layout;
pub mod pipeline;
pub mod selection;
pub mod theme;
pub mod viewport;

pub use component::{CurriculumPage, RoadmapPage};
pub use layout::{CubicSegment, Layout, LayoutConfig, Point, ViewportClass};
pub use pipeline::{Ordering, PlacedNode, RenderFrame, RoadmapView};
pub use selection::SelectionState;
pub use viewport::{FixedViewport, ViewportProbe, WindowViewport};
