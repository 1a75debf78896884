//! Career explorer page.

use leptos::prelude::*;

use super::search::{JobQuery, family_stats, learning_path, search_roles};
use crate::catalog::{Catalog, DomainFilter, JobRole};
use crate::components::roadmap::theme::{domain_style, level_style};
use crate::components::salary::format_salary;

/// Searchable job role catalog with a family filter and a detail panel.
#[component]
pub fn JobsPage() -> impl IntoView {
	let catalog = expect_context::<&'static Catalog>();
	let query = RwSignal::new(JobQuery::default());
	let selected = RwSignal::new(None::<&'static str>);

	let family_buttons = family_stats(catalog.jobs())
		.into_iter()
		.map(|(family, count)| {
			let style = domain_style(family);
			view! {
				<button
					class="family-card"
					class:active=move || query.with(|q| q.family == DomainFilter::Only(family))
					on:click=move |_| query.update(|q| q.family = q.family.toggled(family))
				>
					<span class="family-name" style=format!("color: {}", style.color.to_css())>
						{style.label}
					</span>
					<span class="family-count">{format!("{count} roles")}</span>
				</button>
			}
		})
		.collect_view();

	let results = move || {
		query.with(|q| {
			let found = search_roles(catalog.jobs(), q);
			if found.is_empty() {
				return view! { <p class="empty-state">"No roles match your search."</p> }.into_any();
			}
			found
				.into_iter()
				.map(|role| role_card(role, selected))
				.collect_view()
				.into_any()
		})
	};

	let detail = move || {
		selected
			.get()
			.and_then(|id| catalog.job(id))
			.map(|role| role_detail(catalog, role, selected))
	};

	view! {
		<section class="jobs-page">
			<header class="page-header">
				<span class="eyebrow">"Career Explorer"</span>
				<h1><span class="text-gradient">"Cybersecurity"</span>" Roles"</h1>
				<p>{format!("{}+ cybersecurity roles", catalog.jobs().len())}</p>
			</header>
			<div class="family-grid">{family_buttons}</div>
			<input
				class="search"
				type="search"
				placeholder="Search roles..."
				prop:value=move || query.with(|q| q.text.clone())
				on:input=move |ev| {
					let text = event_target_value(&ev);
					query.update(|q| q.text = text);
				}
			/>
			<div class="jobs-layout">
				<div class="role-list">{results}</div>
				{detail}
			</div>
		</section>
	}
}

fn role_card(role: &'static JobRole, selected: RwSignal<Option<&'static str>>) -> impl IntoView {
	let style = domain_style(role.family);
	let id = role.id.as_str();
	view! {
		<article
			class="role-card"
			class:selected=move || selected.get() == Some(id)
			on:click=move |_| selected.set(Some(id))
		>
			<h3>{role.title.clone()}</h3>
			<span class=format!("badge {}", style.badge)>{style.label}</span>
			<p>{role.description.clone()}</p>
			{role.demand_score.map(|score| view! { <span class="demand">{format!("Demand {score}/10")}</span> })}
		</article>
	}
}

fn role_detail(
	catalog: &'static Catalog,
	role: &'static JobRole,
	selected: RwSignal<Option<&'static str>>,
) -> impl IntoView {
	let band = &role.salary_band;
	let seniority = &role.seniority_levels;
	let steps = [
		Some(("Entry", seniority.entry.clone())),
		Some(("Mid", seniority.mid.clone())),
		Some(("Senior", seniority.senior.clone())),
		Some(("Lead", seniority.lead.clone())),
		seniority.executive.clone().map(|t| ("Executive", t)),
	]
	.into_iter()
	.flatten()
	.map(|(step, title)| view! { <li><span class="step">{step}</span>" "{title}</li> })
	.collect_view();

	let skills = role
		.key_skills
		.iter()
		.map(|s| view! { <span class="badge badge-blue">{s.clone()}</span> })
		.collect_view();
	let certifications = role
		.certifications
		.iter()
		.map(|c| view! { <li>{c.clone()}</li> })
		.collect_view();
	let responsibilities = role
		.typical_responsibilities
		.iter()
		.map(|r| view! { <li>{r.clone()}</li> })
		.collect_view();
	let path = learning_path(catalog, role)
		.into_iter()
		.map(|node| {
			let style = level_style(node.level);
			view! {
				<li>
					<span class="level-icon" style=format!("color: {}", style.accent.to_css())>{style.icon}</span>
					{node.title.clone()}
				</li>
			}
		})
		.collect_view();
	let moves_from = role.career_path.from.join(", ");
	let moves_to = role.career_path.to.join(", ");

	view! {
		<aside class="detail-panel">
			<header>
				<h2>{role.title.clone()}</h2>
				<button class="close" on:click=move |_| selected.set(None)>"×"</button>
			</header>
			<p>{role.description.clone()}</p>
			<div class="salary-band">
				<span class="label">"Salary range"</span>
				<strong>
					{format!(
						"{} – {}",
						format_salary(band.min, &band.currency),
						format_salary(band.max, &band.currency),
					)}
				</strong>
				<span class="muted">{band.experience.clone()}</span>
			</div>
			<h3>"Career Progression"</h3>
			<ol class="seniority">{steps}</ol>
			<h3>"Key Skills"</h3>
			<div class="skills">{skills}</div>
			<h3>"Certifications"</h3>
			<ul>{certifications}</ul>
			<h3>"Typical Responsibilities"</h3>
			<ul>{responsibilities}</ul>
			<h3>"Learning Path"</h3>
			<ol class="learning-path">{path}</ol>
			<p class="career-moves">{format!("From: {moves_from}")}<br />{format!("To: {moves_to}")}</p>
		</aside>
	}
}
