//! Parsing and validation of the compiled-in datasets.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use super::types::{JobRole, RoadmapNode, SalaryMethodology, SalaryRecord};

pub(super) const ROADMAP_JSON: &str = include_str!("../../data/roadmap.json");
pub(super) const CURRICULA_JSON: &str = include_str!("../../data/curricula.json");
pub(super) const JOBS_JSON: &str = include_str!("../../data/jobs.json");
pub(super) const SALARY_JSON: &str = include_str!("../../data/salary.json");

/// Why the catalog could not be built.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to parse {table} table: {source}")]
	Parse {
		table: &'static str,
		#[source]
		source: serde_json::Error,
	},
	#[error("duplicate id {id:?} in {table}")]
	DuplicateId { table: String, id: String },
}

/// Layout of `curricula.json`: ordered node lists plus id aliases.
#[derive(Debug, Default, Deserialize)]
pub(super) struct CurriculaFile {
	pub curricula: BTreeMap<String, Vec<RoadmapNode>>,
	#[serde(default)]
	pub aliases: BTreeMap<String, String>,
}

/// Layout of `salary.json`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct SalaryFile {
	pub methodology: SalaryMethodology,
	pub records: Vec<SalaryRecord>,
}

pub(super) fn parse<'de, T: Deserialize<'de>>(
	table: &'static str,
	json: &'de str,
) -> Result<T, CatalogError> {
	serde_json::from_str(json).map_err(|source| CatalogError::Parse { table, source })
}

/// Rejects a node table in which two records share an id.
pub(super) fn ensure_unique_ids(table: &str, nodes: &[RoadmapNode]) -> Result<(), CatalogError> {
	let mut seen = HashSet::with_capacity(nodes.len());
	for node in nodes {
		if !seen.insert(node.id.as_str()) {
			return Err(CatalogError::DuplicateId {
				table: table.to_string(),
				id: node.id.clone(),
			});
		}
	}
	Ok(())
}

/// Same check for the job table.
pub(super) fn ensure_unique_roles(roles: &[JobRole]) -> Result<(), CatalogError> {
	let mut seen = HashSet::with_capacity(roles.len());
	for role in roles {
		if !seen.insert(role.id.as_str()) {
			return Err(CatalogError::DuplicateId {
				table: "jobs".to_string(),
				id: role.id.clone(),
			});
		}
	}
	Ok(())
}
