//! Skill progression levels.

use log::warn;
use serde::Deserialize;

/// Ordered skill-progression stage of a roadmap node.
///
/// Ordering follows the learning path: beginner topics come first. Any level
/// string the data does not recognize deserializes to [`Level::Beginner`] so a
/// malformed record still renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "String")]
pub enum Level {
	#[default]
	Beginner,
	Intermediate,
	Advanced,
	Professional,
}

impl Level {
	/// Every level in path order.
	pub const ALL: [Level; 4] = [
		Level::Beginner,
		Level::Intermediate,
		Level::Advanced,
		Level::Professional,
	];

	/// Position of this level within [`Level::ALL`].
	pub fn rank(self) -> u8 {
		match self {
			Level::Beginner => 0,
			Level::Intermediate => 1,
			Level::Advanced => 2,
			Level::Professional => 3,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Level::Beginner => "beginner",
			Level::Intermediate => "intermediate",
			Level::Advanced => "advanced",
			Level::Professional => "professional",
		}
	}

	/// Strict parse; `None` for anything outside the four known levels.
	pub fn parse(raw: &str) -> Option<Self> {
		Level::ALL
			.into_iter()
			.find(|level| level.as_str().eq_ignore_ascii_case(raw.trim()))
	}
}

impl From<String> for Level {
	fn from(raw: String) -> Self {
		Level::parse(&raw).unwrap_or_else(|| {
			warn!("cyber-atlas: unknown level {:?}, treating as beginner", raw);
			Level::Beginner
		})
	}
}
