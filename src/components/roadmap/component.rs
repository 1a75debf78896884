//! Leptos views over a [`RoadmapView`].
//!
//! The view state lives in a single `RwSignal`. Every user event calls one
//! pipeline method, which recomputes the whole frame; the SVG and the detail
//! panel simply re-read it. Viewport changes arrive through the window
//! `resize` listener and the [`WindowViewport`] probe.

use leptos::prelude::*;

use super::filter::{domain_counts, level_groups};
use super::pipeline::{PlacedNode, RoadmapView};
use super::theme::{RoadmapTheme, domain_style, level_style};
use super::viewport::{ViewportProbe, WindowViewport};
use crate::Page;
use crate::catalog::{Catalog, DomainFilter, RoadmapNode};

type ViewSignal = RwSignal<RoadmapView<'static>>;

/// Re-probe the viewport on every window resize and push class changes into the view.
fn track_viewport(roadmap: ViewSignal, probe: WindowViewport) {
	let handle = window_event_listener(leptos::ev::resize, move |_| {
		let class = probe.viewport_class();
		if roadmap.with_untracked(|v| v.viewport()) != class {
			roadmap.update(|v| v.set_viewport(class));
		}
	});
	on_cleanup(move || handle.remove());
}

/// Main roadmap: domain filter, zig-zag path and detail panel.
#[component]
pub fn RoadmapPage() -> impl IntoView {
	let catalog = expect_context::<&'static Catalog>();
	let probe = WindowViewport::default();
	let roadmap = RwSignal::new(RoadmapView::new(catalog.roadmap(), probe.viewport_class()));
	track_viewport(roadmap, probe);

	view! {
		<section class="roadmap-page">
			<header class="page-header">
				<span class="eyebrow">"Learning Path"</span>
				<h1><span class="text-gradient">"Visual"</span>" Roadmap"</h1>
			</header>
			<DomainFilterBar roadmap=roadmap nodes=catalog.roadmap() />
			<LevelSummary roadmap=roadmap />
			<div class="roadmap-layout">
				<PathCanvas roadmap=roadmap />
				<NodeDetail roadmap=roadmap />
			</div>
		</section>
	}
}

/// Detailed curriculum for one roadmap id, drawn with the same layout.
#[component]
pub fn CurriculumPage(#[prop(into)] roadmap_id: String) -> impl IntoView {
	let catalog = expect_context::<&'static Catalog>();
	let page = use_context::<RwSignal<Page>>();
	let probe = WindowViewport::default();
	let roadmap = RwSignal::new(RoadmapView::curriculum(
		catalog.curriculum(&roadmap_id),
		probe.viewport_class(),
	));
	track_viewport(roadmap, probe);

	let title = catalog
		.node(&roadmap_id)
		.map(|n| n.title.clone())
		.unwrap_or_else(|| "Cybersecurity".to_string());

	view! {
		<section class="curriculum-page">
			<button
				class="back-link"
				on:click=move |_| {
					if let Some(page) = page {
						page.set(Page::Roadmap);
					}
				}
			>
				"← Back to Overview"
			</button>
			<header class="page-header">
				<span class="eyebrow">"Detailed Curriculum"</span>
				<h1>{title}" "<span class="text-gradient">"Mastery Path"</span></h1>
			</header>
			<div class="roadmap-layout">
				<PathCanvas roadmap=roadmap />
				<NodeDetail roadmap=roadmap />
			</div>
		</section>
	}
}

#[component]
fn DomainFilterBar(roadmap: ViewSignal, nodes: &'static [RoadmapNode]) -> impl IntoView {
	let buttons = domain_counts(nodes)
		.into_iter()
		.map(|(domain, count)| {
			let style = domain_style(domain);
			let filter = DomainFilter::Only(domain);
			view! {
				<button
					class="filter-button"
					class:active=move || roadmap.with(|v| v.filter() == filter)
					title=style.label
					on:click=move |_| roadmap.update(|v| v.set_filter(filter))
				>
					{domain.as_str()}
					<span class="count">{count}</span>
				</button>
			}
		})
		.collect_view();

	view! {
		<nav class="domain-filter">
			<button
				class="filter-button"
				class:active=move || roadmap.with(|v| v.filter() == DomainFilter::All)
				on:click=move |_| roadmap.update(|v| v.set_filter(DomainFilter::All))
			>
				"All Domains"
			</button>
			{buttons}
		</nav>
	}
}

/// Per-level topic counts for the current working set.
#[component]
fn LevelSummary(roadmap: ViewSignal) -> impl IntoView {
	move || {
		roadmap.with(|v| {
			let working = v.working_set();
			level_groups(&working)
				.into_iter()
				.map(|group| {
					let style = level_style(group.level);
					view! {
						<div class="level-chip" style=format!("border-color: {}", style.accent.to_css())>
							<span class="level-icon">{style.icon}</span>
							<span class="level-label">{style.label}</span>
							<span class="level-count">{format!("{} topics", group.nodes.len())}</span>
						</div>
					}
				})
				.collect_view()
		})
	}
}

#[component]
fn PathCanvas(roadmap: ViewSignal) -> impl IntoView {
	let theme = RoadmapTheme::default();
	let (path_start, path_end) = (theme.path_start.to_css(), theme.path_end.to_css());
	let path_width = theme.path_width.to_string();

	let view_box = move || {
		roadmap.with(|v| format!("0 0 {} {}", v.frame().width, v.frame().height))
	};
	let height = move || roadmap.with(|v| format!("{}px", v.frame().height));
	let markers = move || {
		roadmap.with(|v| {
			v.frame()
				.placed
				.iter()
				.map(|placed| node_marker(roadmap, placed, &theme))
				.collect_view()
		})
	};

	view! {
		<div class="path-canvas">
			<Show when=move || roadmap.with(|v| v.frame().is_empty())>
				<p class="empty-state">"No topics match this domain yet."</p>
			</Show>
			<svg
				class="roadmap-svg"
				viewBox=view_box
				style:height=height
				preserveAspectRatio="xMidYMin meet"
			>
				<defs>
					<linearGradient id="pathGradient" x1="0%" y1="0%" x2="0%" y2="100%">
						<stop offset="0%" stop-color=path_start />
						<stop offset="100%" stop-color=path_end />
					</linearGradient>
				</defs>
				<path
					d=move || roadmap.with(|v| v.frame().path.clone())
					fill="none"
					stroke="url(#pathGradient)"
					stroke-width=path_width
					stroke-linecap="round"
				/>
				{markers}
			</svg>
		</div>
	}
}

fn node_marker(roadmap: ViewSignal, placed: &PlacedNode<'static>, theme: &RoadmapTheme) -> impl IntoView + use<> {
	let node = placed.node;
	let style = level_style(node.level);
	let (x, y) = (placed.position.x, placed.position.y);
	let fill = if placed.is_selected {
		style.accent.lighten(0.25)
	} else {
		style.accent
	};
	let ring = if placed.is_selected {
		theme.selected_ring.to_css()
	} else {
		style.glow.to_css()
	};
	let label_y = y + theme.node_radius + theme.label_offset;
	let id = node.id.clone();

	view! {
		<g
			class="roadmap-node"
			class:selected=placed.is_selected
			on:click=move |_| roadmap.update(|v| v.select(&id))
		>
			<circle
				cx=x.to_string()
				cy=y.to_string()
				r=theme.node_radius.to_string()
				fill=fill.to_css()
				stroke=ring
				stroke-width="4"
			/>
			<text x=x.to_string() y=(y + 6.0).to_string() text-anchor="middle" class="node-icon">
				{style.icon}
			</text>
			<text x=x.to_string() y=label_y.to_string() text-anchor="middle" class="node-title">
				{node.title.clone()}
			</text>
			<text x=x.to_string() y=(label_y + 18.0).to_string() text-anchor="middle" class="node-timeline">
				{node.timeline.clone()}
			</text>
		</g>
	}
}

/// Side panel for the selected node, or a prompt when nothing is selected.
#[component]
fn NodeDetail(roadmap: ViewSignal) -> impl IntoView {
	move || match roadmap.with(|v| v.selected_node()) {
		Some(node) => {
			let prerequisites = roadmap.with(|v| v.prerequisites_of(node));
			detail_card(roadmap, node, prerequisites).into_any()
		}
		None => view! {
			<aside class="detail-panel detail-empty">
				<h3>"Select a Topic"</h3>
				<p>"Click on any topic to view detailed information"</p>
			</aside>
		}
		.into_any(),
	}
}

fn detail_card(
	roadmap: ViewSignal,
	node: &'static RoadmapNode,
	prerequisites: Vec<&'static RoadmapNode>,
) -> impl IntoView {
	let catalog = expect_context::<&'static Catalog>();
	let page = use_context::<RwSignal<Page>>();
	let has_curriculum = catalog.curriculum_ids().any(|id| id == node.id);
	let level = level_style(node.level);

	let badges = node
		.domain
		.iter()
		.map(|d| {
			let style = domain_style(*d);
			view! { <span class=format!("badge {}", style.badge)>{d.as_str()}</span> }
		})
		.collect_view();

	let prerequisite_links = prerequisites
		.into_iter()
		.map(|p| {
			let id = p.id.clone();
			view! {
				<li>
					<button class="link" on:click=move |_| roadmap.update(|v| v.select(&id))>
						{p.title.clone()}
					</button>
				</li>
			}
		})
		.collect_view();

	let skills = node
		.skills
		.iter()
		.map(|s| view! { <span class="badge badge-blue">{s.clone()}</span> })
		.collect_view();

	let checklist = node
		.checklist_items
		.iter()
		.map(|item| view! { <li>{item.clone()}</li> })
		.collect_view();

	let resources = node
		.resources
		.iter()
		.map(|r| {
			view! {
				<a class="resource" href=r.url.clone() target="_blank" rel="noopener noreferrer">
					<h4>{r.title.clone()}</h4>
					<span class="badge badge-purple">{r.kind.as_str()}</span>
					{r.provider.clone().map(|p| view! { <span class="badge badge-cyan">{p}</span> })}
					{r.cost.map(|c| view! { <span class="badge badge-green">{c.as_str()}</span> })}
					{r.duration.clone().map(|d| view! { <span class="badge badge-orange">{d}</span> })}
				</a>
			}
		})
		.collect_view();

	let node_id = node.id.clone();

	view! {
		<aside class="detail-panel">
			<header>
				<h2>{node.title.clone()}</h2>
				<button class="close" on:click=move |_| roadmap.update(|v| v.dismiss())>"×"</button>
			</header>
			<span class="level-tag" style=format!("color: {}", level.accent.to_css())>{level.label}</span>
			<div class="badges">{badges}</div>
			<p>{node.description.clone()}</p>
			<p class="why">{node.why_it_matters.clone()}</p>
			<div class="timeline">
				<span class="label">"Timeline"</span>
				<strong>{node.timeline.clone()}</strong>
			</div>
			{has_curriculum
				.then(|| {
					view! {
						<button
							class="open-curriculum"
							on:click=move |_| {
								if let Some(page) = page {
									page.set(Page::Curriculum(node_id.clone()));
								}
							}
						>
							"Open detailed path"
						</button>
					}
				})}
			{(!node.prerequisites.is_empty()).then(|| view! { <h3>"Prerequisites"</h3> })}
			<ul class="prerequisites">{prerequisite_links}</ul>
			{(!node.skills.is_empty()).then(|| view! { <h3>"Key Skills"</h3> })}
			<div class="skills">{skills}</div>
			{(!node.checklist_items.is_empty()).then(|| view! { <h3>"Learning Checklist"</h3> })}
			<ul class="checklist">{checklist}</ul>
			{(!node.resources.is_empty()).then(|| view! { <h3>"Resources"</h3> })}
			<div class="resources">{resources}</div>
		</aside>
	}
}
