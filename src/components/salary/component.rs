//! Salary insights page.

use leptos::prelude::*;

use super::lookup::{available_countries, confidence_percent, format_salary, salaries_for};
use crate::catalog::{Catalog, SalaryRecord};
use crate::components::roadmap::theme::domain_style;

const DEFAULT_ROLE: &str = "security-analyst";
const DEFAULT_COUNTRY: &str = "USA";

/// Role and country pickers over the salary table, plus the methodology notes.
#[component]
pub fn SalaryPage() -> impl IntoView {
	let catalog = expect_context::<&'static Catalog>();
	let role_id = RwSignal::new(DEFAULT_ROLE.to_string());
	let country = RwSignal::new(DEFAULT_COUNTRY.to_string());

	let role_options = catalog
		.jobs()
		.iter()
		.map(|role| view! { <option value=role.id.clone()>{role.title.clone()}</option> })
		.collect_view();
	let country_options = available_countries(catalog.salaries())
		.into_iter()
		.map(|c| view! { <option value=c>{c}</option> })
		.collect_view();

	let role_info = move || {
		role_id.with(|id| catalog.job(id)).map(|role| {
			let family = domain_style(role.family);
			view! {
				<div class="role-info">
					<h2>{role.title.clone()}</h2>
					<p>{role.description.clone()}</p>
					{role.demand_score.map(|s| view! { <span>{format!("Demand Score: {s}/10")}</span> })}
					<span>{format!("Family: {}", family.label)}</span>
				</div>
			}
		})
	};

	let cards = move || {
		let id = role_id.get();
		let selected_country = country.get();
		let records = salaries_for(catalog.salaries(), &id, Some(&selected_country), None);
		if records.is_empty() {
			let title = catalog
				.job(&id)
				.map(|r| r.title.clone())
				.unwrap_or(id);
			return view! {
				<div class="empty-state">
					<p>{format!("No salary data available for {title} in {selected_country}")}</p>
					<p class="muted">"Try selecting a different country or role."</p>
				</div>
			}
			.into_any();
		}
		view! {
			<div class="salary-grid">
				{records.into_iter().map(salary_card).collect_view()}
			</div>
		}
		.into_any()
	};

	view! {
		<section class="salary-page">
			<header class="page-header">
				<h1><span class="text-gradient">"Salary Insights"</span></h1>
				<p>"Data-driven salary analysis for cybersecurity roles across multiple countries and experience levels."</p>
			</header>
			<div class="salary-filters">
				<label>
					"Job Role"
					<select
						prop:value=move || role_id.get()
						on:change=move |ev| role_id.set(event_target_value(&ev))
					>
						{role_options}
					</select>
				</label>
				<label>
					"Country"
					<select
						prop:value=move || country.get()
						on:change=move |ev| country.set(event_target_value(&ev))
					>
						{country_options}
					</select>
				</label>
			</div>
			{role_info}
			{cards}
			<Methodology catalog=catalog />
		</section>
	}
}

fn salary_card(record: &'static SalaryRecord) -> impl IntoView {
	let currency = record.currency.as_str();
	view! {
		<article class="salary-card">
			<h3>{format!("{} Level", record.experience_level.as_str())}</h3>
			<div class="median">
				<span class="label">"Median"</span>
				<strong>{format_salary(record.median, currency)}</strong>
			</div>
			<div class="percentiles">
				<span>"25th %ile "{format_salary(record.percentile25, currency)}</span>
				<span>"75th %ile "{format_salary(record.percentile75, currency)}</span>
			</div>
			<footer>
				<span>{format!("n={}", record.sample_size)}</span>
				<span>{format!("{}% confidence", confidence_percent(record.confidence_score))}</span>
				{record.region.clone().map(|r| view! { <span>{r}</span> })}
			</footer>
		</article>
	}
}

#[component]
fn Methodology(catalog: &'static Catalog) -> impl IntoView {
	let methodology = catalog.methodology();
	let sources = methodology
		.sources
		.iter()
		.map(|source| {
			view! {
				<div class="source">
					<a href=source.url.clone() target="_blank" rel="noopener noreferrer">
						{source.name.clone()}
					</a>
					<div class="muted">
						{format!("Type: {} • Last accessed: {}", source.kind.as_str(), source.last_accessed)}
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="methodology">
			<h2>"Data Methodology"</h2>
			<h3>"Data Sources"</h3>
			<div class="sources">{sources}</div>
			<h3>"Collection Method"</h3>
			<p class="pre-line">{methodology.collection_method.trim().to_string()}</p>
			<h3>"Normalization Approach"</h3>
			<p class="pre-line">{methodology.normalization_approach.trim().to_string()}</p>
			<h3>"Update Frequency"</h3>
			<p>{methodology.update_frequency.clone()}</p>
			<h3>"Minimum Sample Size"</h3>
			<p>{format!("{} data points per role/region", methodology.min_sample_size)}</p>
		</div>
	}
}
