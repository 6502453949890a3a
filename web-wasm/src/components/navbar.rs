//! ナビゲーションバー

use crate::browser;
use johnek_common::route::{nav_items, NavItem};
use johnek_common::scroll::{past_offset, NAVBAR_SOLID_OFFSET};
use johnek_common::site::{CONTACT_BUTTON_DELAY_MS, FIRM_NAME};
use johnek_common::Section;
use leptos::prelude::*;
use std::time::Duration;

#[component]
pub fn Navbar(on_home: bool) -> impl IntoView {
    let scroll_y = browser::use_scroll_y();
    let solid = move || past_offset(scroll_y.get(), NAVBAR_SOLID_OFFSET);
    let (menu_open, set_menu_open) = signal(false);
    let (contact_pending, set_contact_pending) = signal(false);

    // 少し待ってから移動する。トップならスクロール、別ページなら保存して遷移
    let on_contact = move |_| {
        set_contact_pending.set(true);
        set_menu_open.set(false);
        set_timeout(
            move || {
                if on_home {
                    browser::scroll_to_section(Section::Contact);
                } else {
                    browser::store_scroll_target(Section::Contact);
                    browser::navigate("/#contact");
                }
                set_contact_pending.set(false);
            },
            Duration::from_millis(CONTACT_BUTTON_DELAY_MS),
        );
    };

    let links = move || {
        nav_items(on_home)
            .into_iter()
            .map(|item| {
                view! { <NavLink item=item on_home=on_home on_click=move || set_menu_open.set(false) /> }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar" class:solid=solid>
            <div class="navbar-inner">
                <a href="/" class="navbar-brand">{FIRM_NAME}</a>

                <div class="navbar-links">{links}</div>

                <button
                    class="btn btn-primary navbar-contact"
                    disabled=move || contact_pending.get()
                    on:click=on_contact
                >
                    {move || if contact_pending.get() { "Starting..." } else { "Get in Touch" }}
                </button>

                <button
                    class="navbar-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar-mobile">{links}</div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLink<F>(item: NavItem, on_home: bool, on_click: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    let section = item.section.filter(|_| !on_home);
    view! {
        <a
            href=item.href
            class="navbar-link"
            on:click=move |_| {
                // 別ページからのセクション移動はトップ側で拾う
                if let Some(section) = section {
                    browser::store_scroll_target(section);
                }
                on_click();
            }
        >
            {item.label}
        </a>
    }
}
