//! サービス一覧セクション

use crate::content;
use johnek_common::filter::{filter, FilterState, ALL_CATEGORIES};
use johnek_common::route::nav_href;
use johnek_common::stats::count_in_category;
use johnek_common::{Route, Section, Service};
use leptos::prelude::*;

/// カードに出す特徴の数
const FEATURE_PREVIEW: usize = 3;

#[component]
pub fn Services(description: String) -> impl IntoView {
    let catalog = &content::site().services;
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());
    let (hovered, set_hovered) = signal(None::<u32>);

    let visible = move || filter(&catalog.services, &FilterState::new(category.get(), ""));

    view! {
        <section id="services" class="section services">
            <div class="container">
                <div class="section-header">
                    <div class="eyebrow">"Our Expertise"</div>
                    <h2 class="section-title">
                        <span>"Comprehensive"</span>
                        " "
                        <span class="text-gold">"Services"</span>
                    </h2>
                    <p class="text-muted">{description}</p>
                </div>

                <div class="category-buttons">
                    <button
                        class="category-button"
                        class:active=move || category.with(|c| c == ALL_CATEGORIES)
                        on:click=move |_| set_category.set(ALL_CATEGORIES.to_string())
                    >
                        "All Services"
                        <span class="count">{catalog.services.len()}</span>
                    </button>
                    {catalog
                        .categories
                        .iter()
                        .map(|c| {
                            let id = c.id.clone();
                            let selected = c.id.clone();
                            let count = count_in_category(&catalog.services, &c.id);
                            view! {
                                <button
                                    class=format!("category-button {} {}", c.color, c.border)
                                    class:active=move || category.with(|a| *a == id)
                                    on:click=move |_| set_category.set(selected.clone())
                                >
                                    {c.name.clone()}
                                    <span class="count">{count}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="service-grid">
                    <For
                        each=visible
                        key=|service| service.id
                        children=move |service| {
                            view! {
                                <ServiceCard
                                    service=service
                                    highlighted=Signal::derive(move || hovered.get() == Some(service.id))
                                    on_hover=move |over: bool| {
                                        set_hovered.set(over.then_some(service.id))
                                    }
                                />
                            }
                        }
                    />
                </div>

                <div class="services-stats">
                    <div class="services-stat">
                        <div class="services-stat-value">{catalog.services.len()}</div>
                        <div class="services-stat-label">"Total Services"</div>
                    </div>
                    <div class="services-stat">
                        <div class="services-stat-value">{catalog.categories.len()}</div>
                        <div class="services-stat-label">"Categories"</div>
                    </div>
                </div>

                <div class="section-footer">
                    <a href=nav_href(Section::Contact, true) class="btn btn-primary">"Start Your Project"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard<F>(service: &'static Service, highlighted: Signal<bool>, on_hover: F) -> impl IntoView
where
    F: Fn(bool) + 'static + Clone + Send,
{
    let catalog = &content::site().services;
    let category_name = catalog
        .category(&service.category)
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let on_leave = on_hover.clone();

    // "Site Analysis & Feasibility" → "Site Analysis"
    let chips = service
        .features
        .iter()
        .take(FEATURE_PREVIEW)
        .map(|f| f.split(" & ").next().unwrap_or_default().to_string())
        .map(|chip| view! { <span class="chip">{chip}</span> })
        .collect_view();
    let hidden = service.features.len().saturating_sub(FEATURE_PREVIEW);

    view! {
        <a
            href=Route::ServiceDetail(service.slug.clone()).href()
            class=format!("service-card {}", catalog.category_border(&service.category))
            class:highlighted=move || highlighted.get()
            on:mouseenter=move |_| on_hover(true)
            on:mouseleave=move |_| on_leave(false)
        >
            <div class="service-icon">{service.icon.clone()}</div>
            <span class=format!("category-chip {}", catalog.category_color(&service.category))>
                {category_name}
            </span>
            <h3>{service.title.clone()}</h3>
            <p class="line-clamp-3">{service.description.clone()}</p>

            <div class="service-card-facts">
                <div>
                    <div class="text-muted">"Starting from"</div>
                    <div class="text-gold">{service.price_range.clone()}</div>
                </div>
                <div>
                    <div class="text-muted">"Duration"</div>
                    <div>{service.duration.clone()}</div>
                </div>
            </div>

            <div class="service-card-features">
                <div class="text-muted">"Key Features:"</div>
                {chips}
                <Show when=move || { hidden > 0 }>
                    <span class="chip text-gold">{format!("+{} more", hidden)}</span>
                </Show>
            </div>

            <span class="service-card-more">"Learn More →"</span>
        </a>
    }
}
