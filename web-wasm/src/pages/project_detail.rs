//! プロジェクト詳細ページ

use crate::components::not_found::NotFound;
use crate::components::tabs::{TabBar, TabKind};
use crate::components::whatsapp_button::WhatsAppButton;
use crate::content;
use johnek_common::filter::category_label;
use johnek_common::scroll::PROJECT_REVEAL_FRACTION;
use johnek_common::site::DEFAULT_WHATSAPP_NUMBER;
use johnek_common::types::{MediaKind, Stat};
use johnek_common::{Project, Route, WhatsAppLink};
use leptos::prelude::*;
use log::{info, warn};

/// 概要タブに出すハイライトの数
const HIGHLIGHT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProjectTab {
    Overview,
    Gallery,
    Challenges,
    Details,
}

impl TabKind for ProjectTab {
    fn label(&self) -> &'static str {
        match self {
            ProjectTab::Overview => "📋 Overview",
            ProjectTab::Gallery => "🖼️ Gallery",
            ProjectTab::Challenges => "⚡ Challenges",
            ProjectTab::Details => "📊 Details",
        }
    }
}

#[component]
pub fn ProjectDetailPage(slug: String) -> impl IntoView {
    match content::site().project(&slug) {
        Ok(project) => {
            info!("event=project_view module=project_detail status=ok slug={}", slug);
            view! { <ProjectDetail project=project /> }.into_any()
        }
        Err(e) => {
            warn!("event=project_view module=project_detail status=not_found error={}", e);
            view! { <NotFound kind="Project" /> }.into_any()
        }
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    let whatsapp = WhatsAppLink::project_inquiry(DEFAULT_WHATSAPP_NUMBER, &project.name);
    let whatsapp_url = whatsapp.url();
    let (tab, set_tab) = signal(ProjectTab::Overview);

    let tabs = vec![
        ProjectTab::Overview,
        ProjectTab::Gallery,
        ProjectTab::Challenges,
        ProjectTab::Details,
    ];

    let body = move || match tab.get() {
        ProjectTab::Overview => view! { <OverviewTab project=project /> }.into_any(),
        ProjectTab::Gallery => view! { <GalleryTab project=project /> }.into_any(),
        ProjectTab::Challenges => view! { <ChallengesTab project=project /> }.into_any(),
        ProjectTab::Details => view! { <DetailsTab project=project /> }.into_any(),
    };

    view! {
        <div class="page detail-page">
            <WhatsAppButton link=whatsapp fraction=PROJECT_REVEAL_FRACTION />

            <div class="container">
                <a href=Route::Projects.href() class="back-link">"← Back to Projects"</a>

                <div class="detail-header">
                    <div>
                        <div class="detail-meta">
                            <span class="category-chip">{category_label(&project.category)}</span>
                            <span>{project.location.clone()}</span>
                            <span>{project.year.clone()}</span>
                        </div>
                        <h1>{project.name.clone()}</h1>
                        <p class="detail-tagline text-gold">{project.tagline.clone()}</p>
                        <p class="detail-lead">{project.long_description.clone()}</p>
                    </div>
                    <div class="detail-aside">
                        <div class="budget-badge">{project.budget.clone()}</div>
                        <a href=whatsapp_url.clone() target="_blank" rel="noopener noreferrer" class="btn btn-whatsapp-soft">
                            "Quick Inquiry"
                        </a>
                    </div>
                </div>

                <StatsGrid stats=&project.stats />

                <TabBar tabs=tabs active=tab set_active=set_tab />
                <div class="tab-panel">{body}</div>

                <div class="whatsapp-cta">
                    <div>
                        <h3>"Inspired by this project?"</h3>
                        <p class="text-muted">
                            "Chat directly with our architects on WhatsApp to discuss your similar vision"
                        </p>
                    </div>
                    <a href=whatsapp_url.clone() target="_blank" rel="noopener noreferrer" class="btn btn-whatsapp">
                        "Start Your Project"
                    </a>
                </div>

                <div class="next-cta">
                    <div>
                        <h3>"Ready to start your project?"</h3>
                        <p class="text-muted">"Let's create something extraordinary together"</p>
                    </div>
                    <div class="next-cta-actions">
                        <a href=Route::Projects.href() class="btn btn-outline">"View More Projects"</a>
                        <a href=whatsapp_url target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            "WhatsApp Our Team"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatsGrid(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {stats
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stat-card">
                            <div class="stat-icon">{stat.icon.clone()}</div>
                            <div class="stat-value text-gold">{stat.value.clone()}</div>
                            <div class="stat-label">{stat.label.clone()}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn bullet_list(items: &'static [String], class: &'static str) -> impl IntoView {
    view! {
        <ul class=class>
            {items.iter().map(|item| view! { <li>{item.clone()}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn OverviewTab(project: &'static Project) -> impl IntoView {
    let highlights = &project.features[..project.features.len().min(HIGHLIGHT_COUNT)];
    view! {
        <div class="overview">
            <div class="overview-grid">
                <div class="media-placeholder"></div>
                <div>
                    <h3>"Project Highlights"</h3>
                    {bullet_list(highlights, "dot-list")}
                </div>
            </div>
            <p>{project.long_description.clone()}</p>
        </div>
    }
}

#[component]
fn GalleryTab(project: &'static Project) -> impl IntoView {
    let (active, set_active) = signal(0usize);
    let title = move || {
        project
            .gallery
            .get(active.get())
            .map(|item| item.title.clone())
            .unwrap_or_else(|| project.name.clone())
    };

    view! {
        <div class="gallery">
            <div class="gallery-main">
                <h3>{title}</h3>
                <p>{project.description.clone()}</p>
            </div>
            <div class="gallery-thumbs">
                {project
                    .gallery
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let overlay = match item.kind {
                            MediaKind::Video => "▶",
                            MediaKind::Plan => "📐",
                            MediaKind::Image => "",
                        };
                        view! {
                            <button
                                class="gallery-thumb"
                                class:active=move || active.get() == index
                                aria-label=item.title.clone()
                                on:click=move |_| set_active.set(index)
                            >
                                <span class="gallery-overlay">{overlay}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ChallengesTab(project: &'static Project) -> impl IntoView {
    view! {
        <div class="challenges">
            <div class="challenges-grid">
                <div class="panel">
                    <h3>"⚡ Challenges Faced"</h3>
                    {bullet_list(&project.challenges, "dot-list dot-red")}
                </div>
                <div class="panel">
                    <h3>"✅ Our Solutions"</h3>
                    {bullet_list(&project.solutions, "dot-list dot-green")}
                </div>
            </div>
            <div class="panel panel-gold">
                <h3>"🏆 Achievements & Awards"</h3>
                {bullet_list(&project.achievements, "medal-list")}
            </div>
        </div>
    }
}

#[component]
fn DetailsTab(project: &'static Project) -> impl IntoView {
    let rows = |pairs: Vec<(&'static str, String)>| {
        pairs
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="detail-row">
                        <span class="text-muted">{label}</span>
                        <span>{value}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="details">
            <div class="details-grid">
                <div class="panel">
                    <h4>"📊 Project Info"</h4>
                    <div class="detail-row">
                        <span class="text-muted">"Status"</span>
                        <span class=project.status.badge_class()>{project.status.to_string()}</span>
                    </div>
                    {rows(vec![
                        ("Budget", project.budget.clone()),
                        ("Area", project.area.clone()),
                        ("Year", project.year.clone()),
                    ])}
                </div>
                <div class="panel">
                    <h4>"👥 Team"</h4>
                    {rows(vec![
                        ("Client", project.client.clone()),
                        ("Lead Architect", project.architect.clone()),
                        ("Location", project.location.clone()),
                        ("Category", category_label(&project.category)),
                    ])}
                </div>
                <div class="panel">
                    <h4>"✨ Key Features"</h4>
                    {bullet_list(&project.features, "dot-list")}
                </div>
            </div>
            <StatsGrid stats=&project.stats />
        </div>
    }
}
