//! Explicit recomputation pipeline for a roadmap view.
//!
//! Every state change (filter, selection, viewport) runs the whole chain
//! synchronously: filter → order → layout → path → stale-selection check. The
//! result is a [`RenderFrame`] the presentation layer draws as-is. There is no
//! incremental patching and no caching between events.

use log::debug;

use super::filter::{filter_and_sort, filter_nodes};
use super::layout::{Layout, LayoutConfig, Point, ViewportClass};
use super::selection::SelectionState;
use crate::catalog::{DomainFilter, RoadmapNode};

/// How the filtered working set is ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ordering {
	/// Stable sort by level rank.
	#[default]
	ByLevel,
	/// Keep table order (curricula are authored in order).
	Table,
}

/// One node as handed to the renderer.
#[derive(Clone, Debug)]
pub struct PlacedNode<'a> {
	pub node: &'a RoadmapNode,
	/// Rank within the current working set.
	pub index: usize,
	pub position: Point,
	/// Whether the node terminates at least one path segment.
	pub is_endpoint_of_segment: bool,
	pub is_selected: bool,
}

/// Everything the renderer needs for one state.
#[derive(Clone, Debug, Default)]
pub struct RenderFrame<'a> {
	pub placed: Vec<PlacedNode<'a>>,
	/// SVG path data for the connecting curve; empty below two nodes.
	pub path: String,
	pub width: f64,
	pub height: f64,
}

impl RenderFrame<'_> {
	pub fn is_empty(&self) -> bool {
		self.placed.is_empty()
	}
}

/// View-owned state plus the frame derived from it.
#[derive(Clone, Debug)]
pub struct RoadmapView<'a> {
	nodes: &'a [RoadmapNode],
	config: LayoutConfig,
	ordering: Ordering,
	filter: DomainFilter,
	selection: SelectionState,
	viewport: ViewportClass,
	frame: RenderFrame<'a>,
}

impl<'a> RoadmapView<'a> {
	/// A fresh view: no filter, no selection.
	pub fn new(nodes: &'a [RoadmapNode], viewport: ViewportClass) -> Self {
		Self::with_config(nodes, viewport, LayoutConfig::default(), Ordering::ByLevel)
	}

	/// View over an already ordered curriculum.
	pub fn curriculum(nodes: &'a [RoadmapNode], viewport: ViewportClass) -> Self {
		Self::with_config(nodes, viewport, LayoutConfig::default(), Ordering::Table)
	}

	pub fn with_config(
		nodes: &'a [RoadmapNode],
		viewport: ViewportClass,
		config: LayoutConfig,
		ordering: Ordering,
	) -> Self {
		let mut view = Self {
			nodes,
			config,
			ordering,
			filter: DomainFilter::All,
			selection: SelectionState::Unselected,
			viewport,
			frame: RenderFrame::default(),
		};
		view.recompute();
		view
	}

	pub fn set_filter(&mut self, filter: DomainFilter) {
		self.filter = filter;
		self.recompute();
	}

	/// Select a node. Ids outside the current working set do not stick.
	pub fn select(&mut self, id: &str) {
		self.selection.select(id);
		self.recompute();
	}

	pub fn dismiss(&mut self) {
		self.selection.dismiss();
		self.recompute();
	}

	pub fn set_viewport(&mut self, viewport: ViewportClass) {
		self.viewport = viewport;
		self.recompute();
	}

	pub fn filter(&self) -> DomainFilter {
		self.filter
	}

	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	pub fn viewport(&self) -> ViewportClass {
		self.viewport
	}

	pub fn frame(&self) -> &RenderFrame<'a> {
		&self.frame
	}

	/// The working set in display order.
	pub fn working_set(&self) -> Vec<&'a RoadmapNode> {
		self.frame.placed.iter().map(|p| p.node).collect()
	}

	pub fn selected_node(&self) -> Option<&'a RoadmapNode> {
		let id = self.selection.selected_id()?;
		self.frame
			.placed
			.iter()
			.find(|p| p.node.id == id)
			.map(|p| p.node)
	}

	/// Prerequisites of `node` that are part of the current working set.
	/// Ids pointing elsewhere are skipped.
	pub fn prerequisites_of(&self, node: &RoadmapNode) -> Vec<&'a RoadmapNode> {
		node.prerequisites
			.iter()
			.filter_map(|id| self.frame.placed.iter().find(|p| &p.node.id == id))
			.map(|p| p.node)
			.collect()
	}

	fn recompute(&mut self) {
		let working = match self.ordering {
			Ordering::ByLevel => filter_and_sort(self.nodes, self.filter),
			Ordering::Table => filter_nodes(self.nodes, self.filter),
		};
		self.selection
			.retain_visible(working.iter().map(|n| n.id.as_str()));

		let layout = Layout::new(self.config.clone(), self.viewport);
		let count = working.len();
		let connected = count >= 2;
		let placed = working
			.into_iter()
			.enumerate()
			.map(|(index, node)| PlacedNode {
				node,
				index,
				position: layout.position_of(index),
				is_endpoint_of_segment: connected,
				is_selected: self.selection.is_selected(&node.id),
			})
			.collect();

		self.frame = RenderFrame {
			placed,
			path: layout.path_for(count),
			width: layout.canvas_width(),
			height: layout.canvas_height(count),
		};
		debug!(
			"cyber-atlas: recomputed roadmap frame ({} nodes, {:?}, {:?})",
			count, self.filter, self.viewport
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::{Domain, Level};
	use crate::components::roadmap::filter::tests::node;

	fn table() -> Vec<RoadmapNode> {
		vec![
			node("x", Level::Advanced, &[Domain::Offense]),
			node("b", Level::Beginner, &[Domain::Cloud, Domain::Defense]),
			node("c", Level::Intermediate, &[Domain::Cloud]),
		]
	}

	#[test]
	fn frame_is_level_ordered() {
		let nodes = table();
		let view = RoadmapView::new(&nodes, ViewportClass::Wide);
		let ids: Vec<_> = view.working_set().iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["b", "c", "x"]);
		assert_eq!(view.frame().path.matches('C').count(), 2);
		assert!(view.frame().placed.iter().all(|p| p.is_endpoint_of_segment));
	}

	#[test]
	fn refilter_clears_hidden_selection() {
		let nodes = table();
		let mut view = RoadmapView::new(&nodes, ViewportClass::Wide);
		view.select("x");
		assert_eq!(view.selected_node().map(|n| n.id.as_str()), Some("x"));
		view.set_filter(DomainFilter::Only(Domain::Cloud));
		assert_eq!(view.selection(), &SelectionState::Unselected);
		assert!(view.frame().placed.iter().all(|p| !p.is_selected));
	}

	#[test]
	fn selection_does_not_move_nodes() {
		let nodes = table();
		let mut view = RoadmapView::new(&nodes, ViewportClass::Wide);
		let before: Vec<_> = view.frame().placed.iter().map(|p| p.position).collect();
		view.select("c");
		let after: Vec<_> = view.frame().placed.iter().map(|p| p.position).collect();
		assert_eq!(before, after);
		assert!(view.frame().placed[1].is_selected);
	}

	#[test]
	fn selecting_invisible_id_is_dropped() {
		let nodes = table();
		let mut view = RoadmapView::new(&nodes, ViewportClass::Wide);
		view.set_filter(DomainFilter::Only(Domain::Cloud));
		view.select("x");
		assert_eq!(view.selection(), &SelectionState::Unselected);
	}

	#[test]
	fn single_node_has_no_path() {
		let nodes = table();
		let mut view = RoadmapView::new(&nodes, ViewportClass::Narrow);
		view.set_filter(DomainFilter::Only(Domain::Offense));
		assert_eq!(view.frame().placed.len(), 1);
		assert!(view.frame().path.is_empty());
		assert!(!view.frame().placed[0].is_endpoint_of_segment);
	}

	#[test]
	fn empty_working_set_has_zero_height() {
		let nodes = table();
		let mut view = RoadmapView::new(&nodes, ViewportClass::Wide);
		view.set_filter(DomainFilter::Only(Domain::Ot));
		assert!(view.frame().is_empty());
		assert_eq!(view.frame().height, 0.0);
		assert!(view.frame().path.is_empty());
	}

	#[test]
	fn viewport_switch_recomputes_positions() {
		let nodes = table();
		let mut view = RoadmapView::new(&nodes, ViewportClass::Wide);
		view.set_viewport(ViewportClass::Narrow);
		let center = view.frame().width / 2.0;
		assert!(view.frame().placed.iter().all(|p| p.position.x == center));
	}

	#[test]
	fn dangling_prerequisites_are_ignored() {
		let mut nodes = table();
		nodes[2].prerequisites = vec!["b".into(), "ghost".into(), "x".into()];
		let mut view = RoadmapView::new(&nodes, ViewportClass::Wide);
		let prereqs: Vec<_> = view
			.prerequisites_of(&nodes[2])
			.iter()
			.map(|n| n.id.as_str())
			.collect();
		assert_eq!(prereqs, ["b", "x"]);
		view.set_filter(DomainFilter::Only(Domain::Cloud));
		assert_eq!(view.prerequisites_of(&nodes[2]).len(), 1);
	}

	#[test]
	fn curriculum_keeps_table_order() {
		let nodes = table();
		let view = RoadmapView::curriculum(&nodes, ViewportClass::Wide);
		let ids: Vec<_> = view.working_set().iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["x", "b", "c"]);
	}
}
