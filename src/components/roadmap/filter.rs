//! Category filtering and level ordering of roadmap nodes.
//!
//! All functions here are pure and borrow from the node table. The working set
//! is always re-derived from the full table, never patched in place.

use crate::catalog::{Domain, DomainFilter, Level, RoadmapNode};

/// Keep nodes tagged with the selected domain, in table order.
pub fn filter_nodes(nodes: &[RoadmapNode], filter: DomainFilter) -> Vec<&RoadmapNode> {
	nodes.iter().filter(|n| filter.matches(&n.domain)).collect()
}

/// Stable sort by level rank; equal levels keep their relative order.
pub fn sort_by_level(nodes: &mut [&RoadmapNode]) {
	nodes.sort_by_key(|n| n.level.rank());
}

/// [`filter_nodes`] followed by [`sort_by_level`].
pub fn filter_and_sort(nodes: &[RoadmapNode], filter: DomainFilter) -> Vec<&RoadmapNode> {
	let mut working = filter_nodes(nodes, filter);
	sort_by_level(&mut working);
	working
}

/// Consecutive run of same-level nodes in a sorted working set.
#[derive(Clone, Debug)]
pub struct LevelGroup<'a> {
	pub level: Level,
	pub nodes: Vec<&'a RoadmapNode>,
}

/// Split a level-sorted working set into per-level groups, skipping empty levels.
pub fn level_groups<'a>(sorted: &[&'a RoadmapNode]) -> Vec<LevelGroup<'a>> {
	Level::ALL
		.into_iter()
		.filter_map(|level| {
			let nodes: Vec<_> = sorted.iter().copied().filter(|n| n.level == level).collect();
			(!nodes.is_empty()).then_some(LevelGroup { level, nodes })
		})
		.collect()
}

/// Number of nodes each filterable domain would keep.
pub fn domain_counts(nodes: &[RoadmapNode]) -> Vec<(Domain, usize)> {
	Domain::FILTERABLE
		.into_iter()
		.map(|d| (d, nodes.iter().filter(|n| n.domain.contains(&d)).count()))
		.collect()
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;

	pub(crate) fn node(id: &str, level: Level, domain: &[Domain]) -> RoadmapNode {
		RoadmapNode {
			id: id.to_string(),
			title: id.to_uppercase(),
			description: String::new(),
			why_it_matters: String::new(),
			level,
			domain: domain.to_vec(),
			timeline: "1-2 weeks".to_string(),
			prerequisites: Vec::new(),
			children: Vec::new(),
			skills: Vec::new(),
			checklist_items: Vec::new(),
			resources: Vec::new(),
			related_jobs: Vec::new(),
		}
	}

	fn ids(nodes: &[&RoadmapNode]) -> Vec<String> {
		nodes.iter().map(|n| n.id.clone()).collect()
	}

	#[test]
	fn all_keeps_table_order() {
		let nodes = vec![
			node("a", Level::Advanced, &[Domain::Cloud]),
			node("b", Level::Beginner, &[Domain::Offense]),
		];
		assert_eq!(ids(&filter_nodes(&nodes, DomainFilter::All)), ["a", "b"]);
	}

	#[test]
	fn sort_is_stable_within_level() {
		let nodes = vec![
			node("p", Level::Professional, &[Domain::Grc]),
			node("b1", Level::Beginner, &[Domain::Grc]),
			node("i", Level::Intermediate, &[Domain::Grc]),
			node("b2", Level::Beginner, &[Domain::Grc]),
		];
		let sorted = filter_and_sort(&nodes, DomainFilter::All);
		assert_eq!(ids(&sorted), ["b1", "b2", "i", "p"]);
	}

	#[test]
	fn empty_result_is_valid() {
		let nodes = vec![node("a", Level::Beginner, &[Domain::Cloud])];
		assert!(filter_and_sort(&nodes, DomainFilter::Only(Domain::Ot)).is_empty());
		assert!(level_groups(&[]).is_empty());
	}

	#[test]
	fn groups_skip_missing_levels() {
		let nodes = vec![
			node("a", Level::Beginner, &[Domain::Cloud]),
			node("b", Level::Advanced, &[Domain::Cloud]),
			node("c", Level::Beginner, &[Domain::Cloud]),
		];
		let sorted = filter_and_sort(&nodes, DomainFilter::All);
		let groups = level_groups(&sorted);
		assert_eq!(groups.len(), 2);
		assert_eq!(groups[0].level, Level::Beginner);
		assert_eq!(ids(&groups[0].nodes), ["a", "c"]);
		assert_eq!(groups[1].level, Level::Advanced);
	}

	#[test]
	fn counts_cover_every_filterable_domain() {
		let nodes = vec![
			node("a", Level::Beginner, &[Domain::Cloud, Domain::Defense]),
			node("b", Level::Beginner, &[Domain::Cloud]),
		];
		let counts = domain_counts(&nodes);
		assert_eq!(counts.len(), Domain::FILTERABLE.len());
		assert!(counts.contains(&(Domain::Cloud, 2)));
		assert!(counts.contains(&(Domain::Defense, 1)));
		assert!(counts.contains(&(Domain::Offense, 0)));
	}
}
