//! Display descriptors for levels and domains, plus roadmap canvas styling.
//!
//! Level and domain lookups are exhaustive `match`es, so adding a variant
//! without a descriptor fails to compile.

use crate::catalog::{Domain, Level};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// How a skill level is presented.
#[derive(Clone, Copy, Debug)]
pub struct LevelStyle {
	pub label: &'static str,
	pub accent: Color,
	pub glow: Color,
	/// Glyph drawn inside the node marker.
	pub icon: &'static str,
}

pub fn level_style(level: Level) -> LevelStyle {
	let (label, accent, icon) = match level {
		Level::Beginner => ("Beginner", Color::rgb(16, 185, 129), "◎"),
		Level::Intermediate => ("Intermediate", Color::rgb(59, 130, 246), "↗"),
		Level::Advanced => ("Advanced", Color::rgb(168, 85, 247), "ϟ"),
		Level::Professional => ("Professional", Color::rgb(245, 158, 11), "★"),
	};
	LevelStyle {
		label,
		accent,
		glow: accent.with_alpha(0.4),
		icon,
	}
}

/// How a domain tag is presented.
#[derive(Clone, Copy, Debug)]
pub struct DomainStyle {
	pub label: &'static str,
	/// CSS class of the badge.
	pub badge: &'static str,
	pub color: Color,
}

pub fn domain_style(domain: Domain) -> DomainStyle {
	let (label, badge, color) = match domain {
		Domain::Defense => ("Defensive Security", "badge-blue", Color::rgb(96, 165, 250)),
		Domain::Offense => ("Offensive Security", "badge-pink", Color::rgb(244, 114, 182)),
		Domain::Cloud => ("Cloud Security", "badge-cyan", Color::rgb(34, 211, 238)),
		Domain::DevSecOps => ("DevSecOps", "badge-green", Color::rgb(74, 222, 128)),
		Domain::Grc => ("GRC", "badge-purple", Color::rgb(192, 132, 252)),
		Domain::Ot => ("OT Security", "badge-orange", Color::rgb(251, 146, 60)),
		Domain::Leadership => ("Leadership", "badge-orange", Color::rgb(251, 191, 36)),
		Domain::Entry => ("Entry Level", "badge-green", Color::rgb(52, 211, 153)),
		Domain::AppSec => ("Application Security", "badge-pink", Color::rgb(251, 113, 133)),
		Domain::Iam => ("Identity & Access", "badge-blue", Color::rgb(129, 140, 248)),
		Domain::Unknown => ("Other", "badge-slate", Color::rgb(148, 163, 184)),
	};
	DomainStyle {
		label,
		badge,
		color,
	}
}

/// Canvas styling for the roadmap path.
#[derive(Clone, Debug)]
pub struct RoadmapTheme {
	/// Gradient stop at the top of the path.
	pub path_start: Color,
	/// Gradient stop at the bottom of the path.
	pub path_end: Color,
	pub path_width: f64,
	pub node_radius: f64,
	/// Ring drawn around the selected node.
	pub selected_ring: Color,
	/// Gap between a node marker and its title.
	pub label_offset: f64,
}

impl Default for RoadmapTheme {
	fn default() -> Self {
		Self {
			path_start: Color::rgb(168, 85, 247),
			path_end: Color::rgb(59, 130, 246),
			path_width: 4.0,
			node_radius: 32.0,
			selected_ring: Color::rgba(255, 255, 255, 0.8),
			label_offset: 24.0,
		}
	}
}
