//! トップページ

use crate::browser;
use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, loading::Splash,
    projects::Projects, services::Services,
};
use crate::content;
use johnek_common::site::LOADING_DELAY_MS;
use leptos::prelude::*;
use log::debug;
use std::time::Duration;

#[component]
pub fn HomePage() -> impl IntoView {
    let site = content::site();
    let (loading, set_loading) = signal(true);

    set_timeout(
        move || {
            set_loading.set(false);
            // 描画後に別ページから頼まれたセクションへ移動する
            request_animation_frame(|| {
                if let Some(section) = browser::take_scroll_target() {
                    debug!("event=scroll_target module=home status=ok section={}", section.id());
                    browser::scroll_to_section(section);
                }
            });
        },
        Duration::from_millis(LOADING_DELAY_MS),
    );

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Splash /> }>
            <Hero content=site.content.hero.clone() />
            <About content=site.content.about.clone() />
            <Projects />
            <Services description=site.services.description.clone() />
            <Contact content=site.content.contact.clone() />
            <Footer content=site.content.footer.clone() />
        </Show>
    }
}
