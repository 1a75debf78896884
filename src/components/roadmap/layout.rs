//! Zig-zag path layout for an ordered node sequence.
//!
//! Nodes are placed top to bottom at a fixed vertical pitch. On wide viewports
//! they alternate left and right of the center line; on narrow viewports they
//! collapse into a single column. Consecutive nodes are joined by cubic Bezier
//! segments whose control points sit half a pitch below the upper endpoint and
//! half a pitch above the lower one, which bows each segment into an S-shape.
//!
//! # Index-based placement
//!
//! A position depends only on the node's rank in the current view and on the
//! [`ViewportClass`]. Nothing about the node itself is consulted, so removing a
//! node shifts every later node up one slot, and switching viewport class means
//! recomputing everything from scratch.

use std::fmt;

/// Viewport width below which the layout collapses into one column.
pub const DEFAULT_BREAKPOINT: f64 = 768.0;

/// Discrete viewport width class supplied by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewportClass {
	/// Single vertical column.
	Narrow,
	/// Alternating left/right placement.
	#[default]
	Wide,
}

impl ViewportClass {
	/// Classify a measured width against a breakpoint (`width < breakpoint` is narrow).
	pub fn from_width(width: f64, breakpoint: f64) -> Self {
		if width < breakpoint {
			ViewportClass::Narrow
		} else {
			ViewportClass::Wide
		}
	}
}

/// A point in layout space (origin top-left, y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Fixed layout constants. Not user-tunable; exposed so views can pick a set.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Vertical distance between consecutive nodes.
	pub node_spacing: f64,
	/// Offset of the first node from the top edge.
	pub top_padding: f64,
	/// Space kept below the last node.
	pub bottom_padding: f64,
	/// Canvas width on narrow viewports.
	pub narrow_width: f64,
	/// Canvas width on wide viewports.
	pub wide_width: f64,
	/// Horizontal displacement of alternating nodes on wide viewports.
	pub horizontal_swing: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			node_spacing: 180.0,
			top_padding: 100.0,
			bottom_padding: 100.0,
			narrow_width: 300.0,
			wide_width: 800.0,
			horizontal_swing: 200.0,
		}
	}
}

/// One cubic Bezier segment of the connecting path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
	pub from: Point,
	pub ctrl1: Point,
	pub ctrl2: Point,
	pub to: Point,
}

impl fmt::Display for CubicSegment {
	/// SVG path data: `M x0 y0 C c1x c1y, c2x c2y, x1 y1`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"M {} {} C {} {}, {} {}, {} {}",
			self.from.x,
			self.from.y,
			self.ctrl1.x,
			self.ctrl1.y,
			self.ctrl2.x,
			self.ctrl2.y,
			self.to.x,
			self.to.y
		)
	}
}

/// Layout for one viewport class. Cheap to build; rebuild on every change.
#[derive(Clone, Debug)]
pub struct Layout {
	config: LayoutConfig,
	class: ViewportClass,
}

impl Layout {
	pub fn new(config: LayoutConfig, class: ViewportClass) -> Self {
		Self { config, class }
	}

	pub fn class(&self) -> ViewportClass {
		self.class
	}

	pub fn config(&self) -> &LayoutConfig {
		&self.config
	}

	pub fn canvas_width(&self) -> f64 {
		match self.class {
			ViewportClass::Narrow => self.config.narrow_width,
			ViewportClass::Wide => self.config.wide_width,
		}
	}

	pub fn center_x(&self) -> f64 {
		self.canvas_width() / 2.0
	}

	/// Horizontal displacement from center; zero on narrow viewports.
	pub fn swing(&self) -> f64 {
		match self.class {
			ViewportClass::Narrow => 0.0,
			ViewportClass::Wide => self.config.horizontal_swing,
		}
	}

	/// Position of the node at `index`. Even indices swing right, odd left.
	pub fn position_of(&self, index: usize) -> Point {
		let y = index as f64 * self.config.node_spacing + self.config.top_padding;
		let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
		Point::new(self.center_x() + direction * self.swing(), y)
	}

	pub fn positions(&self, count: usize) -> Vec<Point> {
		(0..count).map(|i| self.position_of(i)).collect()
	}

	/// The segment joining node `index` to node `index + 1`.
	pub fn segment(&self, index: usize) -> CubicSegment {
		let from = self.position_of(index);
		let to = self.position_of(index + 1);
		let half = self.config.node_spacing / 2.0;
		CubicSegment {
			from,
			ctrl1: Point::new(from.x, from.y + half),
			ctrl2: Point::new(to.x, to.y - half),
			to,
		}
	}

	/// `count - 1` segments in node order; none for fewer than two nodes.
	pub fn segments(&self, count: usize) -> Vec<CubicSegment> {
		(0..count.saturating_sub(1)).map(|i| self.segment(i)).collect()
	}

	/// Concatenated SVG path data for `count` nodes; empty below two nodes.
	pub fn path_for(&self, count: usize) -> String {
		self.segments(count)
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Height needed to show `count` nodes; zero when there are none.
	pub fn canvas_height(&self, count: usize) -> f64 {
		if count == 0 {
			return 0.0;
		}
		count as f64 * self.config.node_spacing + self.config.top_padding + self.config.bottom_padding
	}
}
