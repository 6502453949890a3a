//! プロジェクト一覧ページ（検索・カテゴリ絞り込み）

use crate::components::loading::ProjectsSkeleton;
use crate::components::project_card::{CategoryButtons, ProjectCard};
use crate::content;
use johnek_common::filter::{categories, filter, FilterState};
use johnek_common::site::MOUNT_ANIMATION_DELAY_MS;
use johnek_common::ProjectStats;
use leptos::prelude::*;
use std::time::Duration;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = &content::site().projects.projects;
    let (state, set_state) = signal(FilterState::default());
    let (mounted, set_mounted) = signal(false);

    set_timeout(
        move || set_mounted.set(true),
        Duration::from_millis(MOUNT_ANIMATION_DELAY_MS),
    );

    let active_category = Signal::derive(move || state.with(|s| s.category.clone()));
    let visible = Memo::new(move |_| state.with(|s| filter(projects, s)));
    let stats = ProjectStats::from_projects(projects);
    let stat_cards = [
        (stats.total, "Total Projects"),
        (stats.completed, "Completed"),
        (stats.countries, "Countries"),
        (stats.awards, "Awards Won"),
    ];

    view! {
        <Show when=move || mounted.get() fallback=|| view! { <ProjectsSkeleton /> }>
            <div class="page projects-page">
                <div class="container">
                    <div class="section-header">
                        <h1 class="section-title">
                            <span>"Our"</span>
                            " "
                            <span class="text-gold">"Projects"</span>
                        </h1>
                        <p class="text-muted">
                            "Explore our portfolio of innovative architectural designs and completed works"
                        </p>
                    </div>

                    <div class="projects-toolbar">
                        <div class="search">
                            <span class="search-icon">"🔍"</span>
                            <input
                                type="text"
                                placeholder="Search projects..."
                                prop:value=move || state.with(|s| s.query.clone())
                                on:input=move |ev| set_state.update(|s| s.query = event_target_value(&ev))
                            />
                        </div>

                        <CategoryButtons
                            categories=categories(projects)
                            active=active_category
                            on_select=move |c| set_state.update(|s| s.category = c)
                        />
                    </div>

                    <div class="projects-stats">
                        {stat_cards
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="projects-stat">
                                        <div class="projects-stat-value">{value}</div>
                                        <div class="projects-stat-label">{label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="project-grid">
                        <For
                            each=move || visible.get()
                            key=|project| project.id
                            children=|project| view! { <ProjectCard project=project /> }
                        />
                    </div>

                    <Show when=move || visible.with(|v| v.is_empty())>
                        <div class="empty-state">
                            <div class="empty-state-icon">"🏗️"</div>
                            <h3>"No Projects Found"</h3>
                            <p class="text-muted">"Try adjusting your search or filter criteria"</p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| set_state.update(FilterState::reset)
                            >
                                "Clear Filters"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
