//! Which single node, if any, is open in the detail panel.

use log::debug;

/// Two-state latch over node ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
	#[default]
	Unselected,
	Selected(String),
}

impl SelectionState {
	/// Select `id`, replacing any previous selection.
	pub fn select(&mut self, id: impl Into<String>) {
		*self = SelectionState::Selected(id.into());
	}

	pub fn dismiss(&mut self) {
		*self = SelectionState::Unselected;
	}

	pub fn selected_id(&self) -> Option<&str> {
		match self {
			SelectionState::Selected(id) => Some(id),
			SelectionState::Unselected => None,
		}
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected_id() == Some(id)
	}

	/// Clear the latch if the selected id is not among `visible`.
	///
	/// Returns `true` when a stale selection was dropped.
	pub fn retain_visible<'a>(&mut self, mut visible: impl Iterator<Item = &'a str>) -> bool {
		let Some(id) = self.selected_id() else {
			return false;
		};
		if visible.any(|v| v == id) {
			return false;
		}
		debug!("cyber-atlas: clearing stale selection {:?}", id);
		self.dismiss();
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn select_then_dismiss() {
		let mut sel = SelectionState::default();
		assert_eq!(sel.selected_id(), None);
		sel.select("x");
		assert!(sel.is_selected("x"));
		sel.select("y");
		assert_eq!(sel.selected_id(), Some("y"));
		sel.dismiss();
		assert_eq!(sel, SelectionState::Unselected);
	}

	#[test]
	fn stale_selection_is_cleared() {
		let mut sel = SelectionState::Selected("x".into());
		assert!(!sel.retain_visible(["a", "x"].into_iter()));
		assert!(sel.is_selected("x"));
		assert!(sel.retain_visible(["a", "b"].into_iter()));
		assert_eq!(sel, SelectionState::Unselected);
		assert!(!sel.retain_visible(std::iter::empty()));
	}
}
