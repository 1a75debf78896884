//! Job role search and per-family statistics.

use crate::catalog::{Catalog, Domain, DomainFilter, JobRole, RoadmapNode};

/// Text plus family constraint, both optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobQuery {
	pub text: String,
	pub family: DomainFilter,
}

impl JobQuery {
	/// Case-insensitive substring match on title or description, AND family match.
	pub fn matches(&self, role: &JobRole) -> bool {
		let needle = self.text.trim().to_lowercase();
		let text_ok = needle.is_empty()
			|| role.title.to_lowercase().contains(&needle)
			|| role.description.to_lowercase().contains(&needle);
		text_ok && self.family.matches_one(role.family)
	}
}

/// Roles matching `query`, in catalog order.
pub fn search_roles<'a>(roles: &'a [JobRole], query: &JobQuery) -> Vec<&'a JobRole> {
	roles.iter().filter(|r| query.matches(r)).collect()
}

/// Role count per job family, in [`Domain::JOB_FAMILIES`] order.
pub fn family_stats(roles: &[JobRole]) -> Vec<(Domain, usize)> {
	Domain::JOB_FAMILIES
		.into_iter()
		.map(|family| (family, roles.iter().filter(|r| r.family == family).count()))
		.collect()
}

/// Roadmap nodes a role recommends, skipping ids the catalog does not have.
pub fn learning_path<'a>(catalog: &'a Catalog, role: &JobRole) -> Vec<&'a RoadmapNode> {
	role.learning_path_nodes
		.iter()
		.filter_map(|id| catalog.node(id))
		.collect()
}
