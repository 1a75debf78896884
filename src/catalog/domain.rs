//! Career-track categories and the filter built on them.

use serde::Deserialize;

/// A career-track category attached to roadmap nodes and job roles.
///
/// Covers every tag present in the bundled data. Tags outside that set land in
/// [`Domain::Unknown`] instead of failing the whole catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "String")]
pub enum Domain {
	Offense,
	Defense,
	Cloud,
	DevSecOps,
	Grc,
	Ot,
	Leadership,
	Entry,
	AppSec,
	Iam,
	Unknown,
}

impl Domain {
	/// Categories offered as roadmap filter buttons, in display order.
	pub const FILTERABLE: [Domain; 7] = [
		Domain::Defense,
		Domain::Offense,
		Domain::Cloud,
		Domain::DevSecOps,
		Domain::Grc,
		Domain::Ot,
		Domain::Leadership,
	];

	/// Job families, in display order.
	pub const JOB_FAMILIES: [Domain; 6] = [
		Domain::Defense,
		Domain::Offense,
		Domain::Cloud,
		Domain::DevSecOps,
		Domain::Grc,
		Domain::Leadership,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Domain::Offense => "offense",
			Domain::Defense => "defense",
			Domain::Cloud => "cloud",
			Domain::DevSecOps => "devsecops",
			Domain::Grc => "grc",
			Domain::Ot => "ot",
			Domain::Leadership => "leadership",
			Domain::Entry => "entry",
			Domain::AppSec => "appsec",
			Domain::Iam => "iam",
			Domain::Unknown => "unknown",
		}
	}
}

impl From<String> for Domain {
	fn from(raw: String) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"offense" => Domain::Offense,
			"defense" => Domain::Defense,
			"cloud" => Domain::Cloud,
			"devsecops" => Domain::DevSecOps,
			"grc" => Domain::Grc,
			"ot" => Domain::Ot,
			"leadership" => Domain::Leadership,
			"entry" => Domain::Entry,
			"appsec" => Domain::AppSec,
			"iam" => Domain::Iam,
			_ => Domain::Unknown,
		}
	}
}

/// The active category selection: everything, or a single domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DomainFilter {
	#[default]
	All,
	Only(Domain),
}

impl DomainFilter {
	/// Set membership: a record tagged with several domains matches each of them.
	pub fn matches(self, domains: &[Domain]) -> bool {
		match self {
			DomainFilter::All => true,
			DomainFilter::Only(domain) => domains.contains(&domain),
		}
	}

	/// Single-tag variant of [`DomainFilter::matches`], used for job families.
	pub fn matches_one(self, domain: Domain) -> bool {
		match self {
			DomainFilter::All => true,
			DomainFilter::Only(wanted) => wanted == domain,
		}
	}

	/// Selecting the already active domain switches back to `All`.
	pub fn toggled(self, domain: Domain) -> Self {
		if self == DomainFilter::Only(domain) {
			DomainFilter::All
		} else {
			DomainFilter::Only(domain)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unrecognized_tag_is_unknown() {
		let tags: Vec<Domain> = serde_json::from_str(r#"["cloud", "quantum"]"#).unwrap();
		assert_eq!(tags, vec![Domain::Cloud, Domain::Unknown]);
	}

	#[test]
	fn filter_uses_set_membership() {
		let tags = [Domain::Cloud, Domain::Defense];
		assert!(DomainFilter::All.matches(&tags));
		assert!(DomainFilter::Only(Domain::Cloud).matches(&tags));
		assert!(!DomainFilter::Only(Domain::Offense).matches(&tags));
		assert!(!DomainFilter::Only(Domain::Cloud).matches(&[]));
	}

	#[test]
	fn toggling_active_domain_resets() {
		let filter = DomainFilter::All.toggled(Domain::Grc);
		assert_eq!(filter, DomainFilter::Only(Domain::Grc));
		assert_eq!(filter.toggled(Domain::Grc), DomainFilter::All);
		assert_eq!(filter.toggled(Domain::Ot), DomainFilter::Only(Domain::Ot));
	}
}
