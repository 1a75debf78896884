//! The fixed, read-only dataset behind every view.
//!
//! Built once at startup from JSON compiled into the binary, then shared by
//! reference. Nothing mutates a [`Catalog`] after [`Catalog::load`] returns.

mod domain;
mod level;
mod load;
mod types;

use std::collections::BTreeMap;

use log::{info, warn};

pub use domain::{Domain, DomainFilter};
pub use level::Level;
pub use load::CatalogError;
pub use types::{
	CareerPath, Cost, EmploymentType, ExperienceLevel, JobRole, MethodologySource, Resource,
	ResourceKind, RoadmapNode, SalaryBand, SalaryMethodology, SalaryRecord, SeniorityLevels,
	SourceKind,
};

use load::{CurriculaFile, SalaryFile};

/// Curriculum shown when a detailed roadmap id has no curriculum of its own.
pub const DEFAULT_CURRICULUM: &str = "junior-pentester";

/// All datasets, immutable once constructed.
#[derive(Debug, Default)]
pub struct Catalog {
	roadmap: Vec<RoadmapNode>,
	curricula: BTreeMap<String, Vec<RoadmapNode>>,
	aliases: BTreeMap<String, String>,
	jobs: Vec<JobRole>,
	salaries: Vec<SalaryRecord>,
	methodology: SalaryMethodology,
}

impl Catalog {
	/// Parse and validate the bundled datasets.
	pub fn load() -> Result<Self, CatalogError> {
		Self::from_json(
			load::ROADMAP_JSON,
			load::CURRICULA_JSON,
			load::JOBS_JSON,
			load::SALARY_JSON,
		)
	}

	/// Like [`Catalog::load`], but logs a failure and returns an empty catalog
	/// so the views still render.
	pub fn load_or_default() -> Self {
		match Self::load() {
			Ok(catalog) => {
				info!(
					"cyber-atlas: loaded {} roadmap nodes, {} curricula, {} roles, {} salary records",
					catalog.roadmap.len(),
					catalog.curricula.len(),
					catalog.jobs.len(),
					catalog.salaries.len()
				);
				catalog
			}
			Err(e) => {
				warn!("cyber-atlas: failed to load catalog: {}", e);
				Self::default()
			}
		}
	}

	/// Build a catalog from explicit JSON documents.
	pub fn from_json(
		roadmap: &str,
		curricula: &str,
		jobs: &str,
		salary: &str,
	) -> Result<Self, CatalogError> {
		let roadmap: Vec<RoadmapNode> = load::parse("roadmap", roadmap)?;
		let CurriculaFile { curricula, aliases } = load::parse("curricula", curricula)?;
		let jobs: Vec<JobRole> = load::parse("jobs", jobs)?;
		let SalaryFile {
			methodology,
			records,
		} = load::parse("salary", salary)?;

		load::ensure_unique_ids("roadmap", &roadmap)?;
		for (id, nodes) in &curricula {
			load::ensure_unique_ids(&format!("curriculum {id}"), nodes)?;
		}
		load::ensure_unique_roles(&jobs)?;

		Ok(Self {
			roadmap,
			curricula,
			aliases,
			jobs,
			salaries: records,
			methodology,
		})
	}

	/// The main roadmap, in authored order.
	pub fn roadmap(&self) -> &[RoadmapNode] {
		&self.roadmap
	}

	pub fn node(&self, id: &str) -> Option<&RoadmapNode> {
		self.roadmap.iter().find(|n| n.id == id)
	}

	/// The detailed curriculum for a roadmap id.
	///
	/// Resolves aliases, then falls back to [`DEFAULT_CURRICULUM`]; empty if
	/// even that is missing.
	pub fn curriculum(&self, id: &str) -> &[RoadmapNode] {
		let key = self.aliases.get(id).map(String::as_str).unwrap_or(id);
		self.curricula
			.get(key)
			.or_else(|| self.curricula.get(DEFAULT_CURRICULUM))
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}

	/// Ids that have a curriculum of their own, aliases included.
	pub fn curriculum_ids(&self) -> impl Iterator<Item = &str> {
		self.curricula
			.keys()
			.chain(self.aliases.keys())
			.map(String::as_str)
	}

	pub fn jobs(&self) -> &[JobRole] {
		&self.jobs
	}

	pub fn job(&self, id: &str) -> Option<&JobRole> {
		self.jobs.iter().find(|r| r.id == id)
	}

	pub fn salaries(&self) -> &[SalaryRecord] {
		&self.salaries
	}

	pub fn methodology(&self) -> &SalaryMethodology {
		&self.methodology
	}
}
