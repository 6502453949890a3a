//! ヒーローセクション

use crate::browser;
use crate::components::typewriter::Typewriter;
use johnek_common::scroll::parallax_offset;
use johnek_common::site::{HERO_TAGLINE_DELAY_MS, MOUNT_ANIMATION_DELAY_MS};
use johnek_common::types::HeroContent;
use leptos::prelude::*;
use std::time::Duration;

const HERO_STATS: [(&str, &str); 4] = [
    ("25+", "Years"),
    ("300+", "Projects"),
    ("50+", "Awards"),
    ("40+", "Experts"),
];

#[component]
pub fn Hero(content: HeroContent) -> impl IntoView {
    let scroll_y = browser::use_scroll_y();
    let (loaded, set_loaded) = signal(false);

    // マウント直後はフェードイン前の状態
    set_timeout(
        move || set_loaded.set(true),
        Duration::from_millis(MOUNT_ANIMATION_DELAY_MS),
    );

    let backdrop_style = move || format!("transform: translateY({}px)", parallax_offset(scroll_y.get()));

    view! {
        <section class="hero">
            <div class="hero-backdrop" style=backdrop_style>
                <div class="hero-ring hero-ring-large"></div>
                <div class="hero-ring hero-ring-small"></div>
                <div class="hero-diamond"></div>
            </div>

            <div class="hero-content fade-up" class:visible=move || loaded.get()>
                <h1 class="hero-title">
                    <span>"JOHNEK"</span>
                    <span class="text-gold">"ARCHITECTS"</span>
                </h1>
                <div class="hero-rule"></div>

                <p class="hero-tagline">
                    <Typewriter text=content.tagline delay=HERO_TAGLINE_DELAY_MS />
                </p>
                <p class="hero-description">{content.description}</p>

                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">"View Our Work"</a>
                    <a href="#contact" class="btn btn-outline">"Get In Touch"</a>
                </div>

                <div class="hero-stats">
                    {HERO_STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="hero-stat">
                                    <div class="hero-stat-value">{*value}</div>
                                    <div class="hero-stat-label">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="hero-scroll" class:visible=move || loaded.get()>
                <span>"SCROLL"</span>
                <span class="bounce">"↓"</span>
            </div>
        </section>
    }
}
