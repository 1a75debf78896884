//! Record shapes for the bundled datasets.
//!
//! Field names follow the camelCase keys used in `data/*.json`.

use serde::Deserialize;

use super::domain::Domain;
use super::level::Level;

/// Kind of learning material a [`Resource`] points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
	Book,
	Course,
	Lab,
	Video,
	Article,
	Certification,
	#[serde(other)]
	Other,
}

impl ResourceKind {
	pub fn as_str(self) -> &'static str {
		match self {
			ResourceKind::Book => "book",
			ResourceKind::Course => "course",
			ResourceKind::Lab => "lab",
			ResourceKind::Video => "video",
			ResourceKind::Article => "article",
			ResourceKind::Certification => "certification",
			ResourceKind::Other => "other",
		}
	}
}

/// Pricing model of a [`Resource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cost {
	Free,
	Paid,
	Freemium,
}

impl Cost {
	pub fn as_str(self) -> &'static str {
		match self {
			Cost::Free => "free",
			Cost::Paid => "paid",
			Cost::Freemium => "freemium",
		}
	}
}

/// An external learning resource linked from a roadmap node.
#[derive(Clone, Debug, Deserialize)]
pub struct Resource {
	pub id: String,
	pub title: String,
	#[serde(rename = "type")]
	pub kind: ResourceKind,
	pub url: String,
	#[serde(default)]
	pub provider: Option<String>,
	#[serde(default)]
	pub cost: Option<Cost>,
	#[serde(default)]
	pub duration: Option<String>,
}

/// A single roadmap topic.
///
/// `prerequisites` and `children` may name ids that are absent from the
/// current view; such references are ignored, never reported.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapNode {
	/// Unique across the table the node belongs to.
	pub id: String,
	pub title: String,
	pub description: String,
	pub why_it_matters: String,
	pub level: Level,
	pub domain: Vec<Domain>,
	/// Free-text duration estimate, e.g. "2-4 weeks".
	pub timeline: String,
	#[serde(default)]
	pub prerequisites: Vec<String>,
	#[serde(default)]
	pub children: Vec<String>,
	#[serde(default)]
	pub skills: Vec<String>,
	#[serde(default)]
	pub checklist_items: Vec<String>,
	#[serde(default)]
	pub resources: Vec<Resource>,
	#[serde(default)]
	pub related_jobs: Vec<String>,
}

/// Titles a role carries at each seniority step.
#[derive(Clone, Debug, Deserialize)]
pub struct SeniorityLevels {
	pub entry: String,
	pub mid: String,
	pub senior: String,
	pub lead: String,
	#[serde(default)]
	pub executive: Option<String>,
}

/// Role ids people typically move from and into.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CareerPath {
	#[serde(default)]
	pub from: Vec<String>,
	#[serde(default)]
	pub to: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SalaryBand {
	pub min: u64,
	pub max: u64,
	pub currency: String,
	pub experience: String,
}

/// A job role in the career catalog.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRole {
	pub id: String,
	pub title: String,
	pub family: Domain,
	pub description: String,
	pub seniority_levels: SeniorityLevels,
	#[serde(default)]
	pub key_skills: Vec<String>,
	#[serde(default)]
	pub certifications: Vec<String>,
	#[serde(default)]
	pub career_path: CareerPath,
	pub salary_band: SalaryBand,
	/// Roadmap node ids, resolved against the catalog on display.
	#[serde(default)]
	pub learning_path_nodes: Vec<String>,
	#[serde(default)]
	pub typical_responsibilities: Vec<String>,
	/// 1-10 market demand estimate.
	#[serde(default)]
	pub demand_score: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
	Entry,
	Mid,
	Senior,
	Lead,
}

impl ExperienceLevel {
	pub fn as_str(self) -> &'static str {
		match self {
			ExperienceLevel::Entry => "entry",
			ExperienceLevel::Mid => "mid",
			ExperienceLevel::Senior => "senior",
			ExperienceLevel::Lead => "lead",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
	Fulltime,
	Contract,
	Freelance,
}

/// One salary observation for a role, country and experience bucket.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
	pub role_id: String,
	pub country: String,
	#[serde(default)]
	pub region: Option<String>,
	pub experience_level: ExperienceLevel,
	pub year: u16,
	pub quarter: u8,
	pub median: u64,
	pub percentile25: u64,
	pub percentile75: u64,
	pub currency: String,
	pub sample_size: u32,
	/// 0.0..=1.0
	pub confidence_score: f64,
	pub employment_type: EmploymentType,
	#[serde(default)]
	pub sources: Vec<String>,
	pub last_updated: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
	Api,
	Survey,
	Scraping,
	Government,
}

impl SourceKind {
	pub fn as_str(self) -> &'static str {
		match self {
			SourceKind::Api => "api",
			SourceKind::Survey => "survey",
			SourceKind::Scraping => "scraping",
			SourceKind::Government => "government",
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodologySource {
	pub name: String,
	pub url: String,
	#[serde(rename = "type")]
	pub kind: SourceKind,
	pub last_accessed: String,
}

/// How the salary figures were collected and normalized.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryMethodology {
	pub sources: Vec<MethodologySource>,
	pub collection_method: String,
	pub normalization_approach: String,
	pub update_frequency: String,
	pub min_sample_size: u32,
}
