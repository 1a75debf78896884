//! Salary record queries and currency formatting.

use crate::catalog::{ExperienceLevel, SalaryRecord};

/// Records for a role, optionally narrowed to a country and experience bucket.
pub fn salaries_for<'a>(
	records: &'a [SalaryRecord],
	role_id: &str,
	country: Option<&str>,
	experience: Option<ExperienceLevel>,
) -> Vec<&'a SalaryRecord> {
	records
		.iter()
		.filter(|r| r.role_id == role_id)
		.filter(|r| country.is_none_or(|c| r.country == c))
		.filter(|r| experience.is_none_or(|e| r.experience_level == e))
		.collect()
}

/// Countries with at least one record, in first-seen order.
pub fn available_countries(records: &[SalaryRecord]) -> Vec<&str> {
	let mut countries: Vec<&str> = Vec::new();
	for record in records {
		if !countries.contains(&record.country.as_str()) {
			countries.push(&record.country);
		}
	}
	countries
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
	match currency {
		"USD" => Some("$"),
		"GBP" => Some("£"),
		"EUR" => Some("€"),
		"INR" => Some("₹"),
		_ => None,
	}
}

/// Whole-unit amount with en-US thousands grouping, e.g. `$120,000`.
///
/// Currencies without a known symbol are prefixed with their code and a space.
pub fn format_salary(amount: u64, currency: &str) -> String {
	let digits = amount.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	match currency_symbol(currency) {
		Some(symbol) => format!("{symbol}{grouped}"),
		None => format!("{currency} {grouped}"),
	}
}

/// Confidence score as a whole percentage.
pub fn confidence_percent(score: f64) -> u32 {
	(score.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::catalog::Catalog;

	#[test]
	fn formats_with_grouping_and_symbol() {
		assert_eq!(format_salary(0, "USD"), "$0");
		assert_eq!(format_salary(950, "USD"), "$950");
		assert_eq!(format_salary(1_000, "GBP"), "£1,000");
		assert_eq!(format_salary(120_000, "USD"), "$120,000");
		assert_eq!(format_salary(1_234_567, "INR"), "₹1,234,567");
		assert_eq!(format_salary(45_000, "CHF"), "CHF 45,000");
	}

	#[test]
	fn confidence_rounds() {
		assert_eq!(confidence_percent(0.756), 76);
		assert_eq!(confidence_percent(1.4), 100);
	}

	#[test]
	fn lookup_narrows_by_country_and_experience() {
		let catalog = Catalog::load().unwrap();
		let records = catalog.salaries();
		let all = salaries_for(records, "security-analyst", None, None);
		let usa = salaries_for(records, "security-analyst", Some("USA"), None);
		assert!(!usa.is_empty());
		assert!(usa.len() <= all.len());
		assert!(usa.iter().all(|r| r.country == "USA"));
		let entry = salaries_for(
			records,
			"security-analyst",
			Some("USA"),
			Some(ExperienceLevel::Entry),
		);
		assert!(entry.iter().all(|r| r.experience_level == ExperienceLevel::Entry));
		assert!(salaries_for(records, "no-such-role", None, None).is_empty());
	}

	#[test]
	fn countries_are_unique_in_first_seen_order() {
		let catalog = Catalog::load().unwrap();
		let countries = available_countries(catalog.salaries());
		assert_eq!(countries.first(), Some(&"USA"));
		let unique: HashSet<_> = countries.iter().collect();
		assert_eq!(unique.len(), countries.len());
		assert!(countries.contains(&"UK"));
	}
}
