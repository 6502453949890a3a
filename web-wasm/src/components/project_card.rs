//! プロジェクトカード

use johnek_common::filter::category_label;
use johnek_common::{Project, Route};
use leptos::prelude::*;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let href = Route::ProjectDetail(project.slug.clone()).href();
    let image_style = if project.image.is_empty() {
        String::new()
    } else {
        format!("background-image: url({})", project.image)
    };

    view! {
        <a href=href class="project-card">
            <span class=project.status.badge_class()>{project.status.to_string()}</span>
            <div class="project-card-image" style=image_style></div>

            <div class="project-card-body">
                <div class="project-card-heading">
                    <h3>{project.name.clone()}</h3>
                    <span class="category-chip">{category_label(&project.category)}</span>
                </div>
                <p class="line-clamp-2">{project.description.clone()}</p>
                <div class="project-card-meta">
                    <span class="text-gold">{project.budget.clone()}</span>
                    <span>"•"</span>
                    <span>{project.location.clone()}</span>
                    <span class="project-card-year">{project.year.clone()}</span>
                </div>
                <span class="project-card-more">"View →"</span>
            </div>
        </a>
    }
}

/// カテゴリ切り替えボタン
#[component]
pub fn CategoryButtons<F>(
    categories: Vec<String>,
    #[prop(into)] active: Signal<String>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="category-buttons">
            {categories
                .into_iter()
                .map(|category| {
                    let on_select = on_select.clone();
                    let label = category_label(&category);
                    let selected = category.clone();
                    view! {
                        <button
                            class="category-button"
                            class:active=move || active.with(|a| *a == category)
                            on:click=move |_| on_select(selected.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
