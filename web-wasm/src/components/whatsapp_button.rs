//! スクロールで現れるWhatsApp問い合わせボタン

use crate::browser;
use johnek_common::scroll::should_reveal;
use johnek_common::WhatsAppLink;
use leptos::prelude::*;

/// `fraction` はページの高さに対する表示しきい値
#[component]
pub fn WhatsAppButton(link: WhatsAppLink, fraction: f64) -> impl IntoView {
    let scroll_y = browser::use_scroll_y();
    let visible = move || should_reveal(scroll_y.get(), browser::document_height(), fraction);
    let (hovered, set_hovered) = signal(false);

    view! {
        <a
            href=link.url()
            target="_blank"
            rel="noopener noreferrer"
            class="whatsapp-float"
            class:visible=visible
            aria-label="Chat on WhatsApp"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <span class="whatsapp-ring"></span>
            <span class="whatsapp-icon">"💬"</span>
            <span class="whatsapp-label" class:shown=move || hovered.get()>"Chat Now"</span>
        </a>
    }
}
