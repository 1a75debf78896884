//! cyber-atlas: cybersecurity career roadmap, job catalog and salary explorer.
//!
//! This crate builds a client-side rendered WASM site over a fixed, compiled-in
//! dataset. The roadmap view filters topics by career domain, orders them by
//! skill level and lays them out along a zig-zag Bezier path.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod catalog;
pub mod components;

use catalog::Catalog;
use components::jobs::JobsPage;
use components::roadmap::{CurriculumPage, RoadmapPage};
use components::salary::SalaryPage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("cyber-atlas: logging initialized");
}

/// Top-level page shown by [`App`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Page {
	#[default]
	Roadmap,
	/// Detailed curriculum for a roadmap node id.
	Curriculum(String),
	Jobs,
	Salary,
}

/// Parse and pin the catalog for the lifetime of the page.
fn load_catalog() -> &'static Catalog {
	Box::leak(Box::new(Catalog::load_or_default()))
}

/// Main application component.
/// Loads the catalog once, then switches between the roadmap, jobs and salary pages.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let catalog = load_catalog();
	provide_context(catalog);
	let page = RwSignal::new(Page::default());
	provide_context(page);

	let nav_item = move |label: &'static str, target: Page| {
		let active = target.clone();
		view! {
			<button
				class="nav-item"
				class:active=move || page.with(|p| *p == active)
				on:click=move |_| page.set(target.clone())
			>
				{label}
			</button>
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Cyber Atlas" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<nav class="navbar">
			<span class="brand">"Cyber Atlas"</span>
			{nav_item("Roadmap", Page::Roadmap)}
			{nav_item("Careers", Page::Jobs)}
			{nav_item("Salaries", Page::Salary)}
		</nav>
		<main>
			{move || match page.get() {
				Page::Roadmap => view! { <RoadmapPage /> }.into_any(),
				Page::Curriculum(id) => view! { <CurriculumPage roadmap_id=id /> }.into_any(),
				Page::Jobs => view! { <JobsPage /> }.into_any(),
				Page::Salary => view! { <SalaryPage /> }.into_any(),
			}}
		</main>
	}
}
