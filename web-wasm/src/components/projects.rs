//! トップページのおすすめプロジェクト

use crate::components::project_card::{CategoryButtons, ProjectCard};
use crate::content;
use johnek_common::filter::{featured, FilterState, ALL_CATEGORIES};
use johnek_common::site::{HOME_FEATURED_LIMIT, HOME_PROJECT_CATEGORIES};
use johnek_common::Route;
use leptos::prelude::*;

#[component]
pub fn Projects() -> impl IntoView {
    let projects = &content::site().projects.projects;
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());

    let categories: Vec<String> = std::iter::once(ALL_CATEGORIES)
        .chain(HOME_PROJECT_CATEGORIES)
        .map(str::to_string)
        .collect();
    let visible = move || {
        let state = FilterState::new(category.get(), "");
        featured(projects, &state, HOME_FEATURED_LIMIT)
    };

    view! {
        <section id="projects" class="section projects">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        <span>"Featured"</span>
                        " "
                        <span class="text-gold">"Projects"</span>
                    </h2>
                    <p class="text-muted">
                        "Explore our portfolio of innovative architectural designs and completed works"
                    </p>
                </div>

                <CategoryButtons
                    categories=categories
                    active=category
                    on_select=move |c| set_category.set(c)
                />

                <div class="project-grid">
                    <For
                        each=visible
                        key=|project| project.id
                        children=|project| view! { <ProjectCard project=project /> }
                    />
                </div>

                <div class="section-footer">
                    <a href=Route::Projects.href() class="btn btn-outline">"View All Projects →"</a>
                </div>
            </div>
        </section>
    }
}
