//! 事務所紹介セクション

use crate::browser;
use crate::content;
use johnek_common::site::years_of_practice;
use johnek_common::types::AboutContent;
use johnek_common::ProjectStats;
use leptos::prelude::*;

#[component]
pub fn About(content: AboutContent) -> impl IntoView {
    // 見出しは先頭語だけ色を変える
    let (lead, rest) = match content.title.split_once(' ') {
        Some((lead, rest)) => (lead.to_string(), rest.to_string()),
        None => (content.title.clone(), String::new()),
    };

    let stats = ProjectStats::from_projects(&content::site().projects.projects);
    let highlights = [
        (format!("{}+", years_of_practice(browser::current_year())), "Years of Practice"),
        (stats.total.to_string(), "Featured Projects"),
        (stats.countries.to_string(), "Countries"),
        (stats.awards.to_string(), "Awards Won"),
    ];

    view! {
        <section id="about" class="section about">
            <div class="container about-grid">
                <div>
                    <h2 class="section-title">
                        <span>{lead}</span>
                        " "
                        <span class="text-gold">{rest}</span>
                    </h2>
                    <div class="section-rule"></div>
                    <p class="about-description">{content.description}</p>
                    <p class="about-mission">{content.mission}</p>
                    <ul class="about-values">
                        {content
                            .values
                            .into_iter()
                            .map(|value| view! { <li>{value}</li> })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <div class="about-stats">
                        {highlights
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="about-stat">
                                        <div class="about-stat-value">{value}</div>
                                        <div class="about-stat-label">{label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="about-emblem">
                        <p>"Architectural Excellence Since 1998"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
