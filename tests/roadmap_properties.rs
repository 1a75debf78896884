//! Property-based invariants for roadmap filtering, ordering and layout.
//!
//! 1. Filtering keeps a node iff the domain is among its tags.
//! 2. The `All` filter is the identity.
//! 3. Sorting is stable within a level.
//! 4. Sorted output is non-decreasing in level rank.
//! 5. Positions are deterministic.
//! 6. Wide layout alternates sides of the center line.
//! 7. Narrow layout collapses to the center line.
//! 8. A path over N nodes has max(N - 1, 0) segments.
//! 9. Vertical placement is strictly increasing.

use cyber_atlas::catalog::{Domain, DomainFilter, Level, RoadmapNode};
use cyber_atlas::components::roadmap::filter::{filter_and_sort, filter_nodes};
use cyber_atlas::components::roadmap::{Layout, LayoutConfig, ViewportClass};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const DOMAINS: [Domain; 10] = [
	Domain::Offense,
	Domain::Defense,
	Domain::Cloud,
	Domain::DevSecOps,
	Domain::Grc,
	Domain::Ot,
	Domain::Leadership,
	Domain::Entry,
	Domain::AppSec,
	Domain::Iam,
];

fn make_node(index: usize, level: Level, domain: Vec<Domain>) -> RoadmapNode {
	RoadmapNode {
		id: format!("node-{index}"),
		title: format!("Node {index}"),
		description: String::new(),
		why_it_matters: String::new(),
		level,
		domain,
		timeline: "1 week".into(),
		prerequisites: Vec::new(),
		children: Vec::new(),
		skills: Vec::new(),
		checklist_items: Vec::new(),
		resources: Vec::new(),
		related_jobs: Vec::new(),
	}
}

fn level_strategy() -> impl Strategy<Value = Level> {
	prop::sample::select(Level::ALL.to_vec())
}

fn domain_strategy() -> impl Strategy<Value = Domain> {
	prop::sample::select(DOMAINS.to_vec())
}

fn nodes_strategy() -> impl Strategy<Value = Vec<RoadmapNode>> {
	prop::collection::vec(
		(level_strategy(), prop::collection::vec(domain_strategy(), 1..4)),
		0..40,
	)
	.prop_map(|rows| {
		rows
			.into_iter()
			.enumerate()
			.map(|(i, (level, domain))| make_node(i, level, domain))
			.collect()
	})
}

fn class_strategy() -> impl Strategy<Value = ViewportClass> {
	prop_oneof![Just(ViewportClass::Narrow), Just(ViewportClass::Wide)]
}

fn position_in(nodes: &[RoadmapNode], id: &str) -> usize {
	nodes.iter().position(|n| n.id == id).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Filter correctness and identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn filter_keeps_exactly_tagged_nodes(nodes in nodes_strategy(), domain in domain_strategy()) {
		let kept = filter_nodes(&nodes, DomainFilter::Only(domain));
		for node in &nodes {
			let present = kept.iter().any(|k| k.id == node.id);
			prop_assert_eq!(present, node.domain.contains(&domain), "node {}", node.id);
		}
	}

	#[test]
	fn all_filter_is_identity(nodes in nodes_strategy()) {
		let kept: Vec<_> = filter_nodes(&nodes, DomainFilter::All).iter().map(|n| n.id.clone()).collect();
		let authored: Vec<_> = nodes.iter().map(|n| n.id.clone()).collect();
		prop_assert_eq!(kept, authored);
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Sort stability and correctness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn sort_is_stable(nodes in nodes_strategy()) {
		let sorted = filter_and_sort(&nodes, DomainFilter::All);
		for pair in sorted.windows(2) {
			if pair[0].level == pair[1].level {
				prop_assert!(
					position_in(&nodes, &pair[0].id) < position_in(&nodes, &pair[1].id),
					"{} and {} swapped", pair[0].id, pair[1].id
				);
			}
		}
	}

	#[test]
	fn sort_is_ordered_by_rank(nodes in nodes_strategy(), domain in domain_strategy()) {
		let sorted = filter_and_sort(&nodes, DomainFilter::Only(domain));
		for pair in sorted.windows(2) {
			prop_assert!(pair[0].level.rank() <= pair[1].level.rank());
		}
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 5-7. Placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn position_is_deterministic(index in 0usize..500, class in class_strategy()) {
		let a = Layout::new(LayoutConfig::default(), class);
		let b = Layout::new(LayoutConfig::default(), class);
		prop_assert_eq!(a.position_of(index), a.position_of(index));
		prop_assert_eq!(a.position_of(index), b.position_of(index));
	}

	#[test]
	fn wide_layout_alternates_sides(index in 0usize..500) {
		let layout = Layout::new(LayoutConfig::default(), ViewportClass::Wide);
		let center = layout.center_x();
		let here = layout.position_of(index).x - center;
		let next = layout.position_of(index + 1).x - center;
		prop_assert!(here * next < 0.0, "x offsets {} and {} on the same side", here, next);
	}

	#[test]
	fn narrow_layout_is_centered(index in 0usize..500) {
		let layout = Layout::new(LayoutConfig::default(), ViewportClass::Narrow);
		prop_assert_eq!(layout.position_of(index).x, layout.center_x());
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 8-9. Path shape and vertical order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn path_has_one_segment_per_gap(count in 0usize..60, class in class_strategy()) {
		let layout = Layout::new(LayoutConfig::default(), class);
		let path = layout.path_for(count);
		let expected = count.saturating_sub(1);
		prop_assert_eq!(layout.segments(count).len(), expected);
		prop_assert_eq!(path.matches('M').count(), expected);
		prop_assert_eq!(path.matches('C').count(), expected);
		prop_assert_eq!(path.is_empty(), count < 2);
	}

	#[test]
	fn y_strictly_increases(index in 0usize..500, class in class_strategy()) {
		let layout = Layout::new(LayoutConfig::default(), class);
		prop_assert!(layout.position_of(index).y < layout.position_of(index + 1).y);
	}

	#[test]
	fn segments_join_consecutive_positions(count in 2usize..30) {
		let layout = Layout::new(LayoutConfig::default(), ViewportClass::Wide);
		let half = layout.config().node_spacing / 2.0;
		for (i, seg) in layout.segments(count).iter().enumerate() {
			prop_assert_eq!(seg.from, layout.position_of(i));
			prop_assert_eq!(seg.to, layout.position_of(i + 1));
			prop_assert_eq!(seg.ctrl1.x, seg.from.x);
			prop_assert_eq!(seg.ctrl1.y, seg.from.y + half);
			prop_assert_eq!(seg.ctrl2.x, seg.to.x);
			prop_assert_eq!(seg.ctrl2.y, seg.to.y - half);
		}
	}
}
