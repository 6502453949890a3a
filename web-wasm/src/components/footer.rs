//! フッター

use crate::browser;
use johnek_common::share::{mailto, tel};
use johnek_common::site::{CONTACT_EMAIL, CONTACT_PHONE, FOOTER_LINKS, FOUNDED_YEAR, SOCIAL_LINKS};
use johnek_common::types::FooterContent;
use leptos::prelude::*;

#[component]
pub fn Footer(content: FooterContent) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <h2>
                        <span>"JOHNEK"</span>
                        " "
                        <span class="text-gold">"ARCHITECTS"</span>
                    </h2>
                    <p class="eyebrow">{format!("Since {}", FOUNDED_YEAR)}</p>
                    <p class="footer-tagline">{content.tagline}</p>

                    <div class="newsletter">
                        <p>"Subscribe to our newsletter"</p>
                        <input type="email" placeholder="Your email address" />
                        <button class="btn btn-primary">"Subscribe"</button>
                    </div>
                </div>

                <div>
                    <h3>"Quick Links"</h3>
                    <ul class="footer-links">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3>"Connect With Us"</h3>
                    <a href=mailto(CONTACT_EMAIL) class="footer-contact">{CONTACT_EMAIL}</a>
                    <a href=tel(CONTACT_PHONE) class="footer-contact">{CONTACT_PHONE}</a>

                    <p class="text-muted">"Follow our journey"</p>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a href="#" class="social-link" aria-label=social.label>
                                        {social.icon}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>{content.copyright}</p>
                <p>
                    <span>"New York • London • Tokyo • Dubai"</span>
                    <span>"Registered in England & Wales: 12345678"</span>
                </p>
            </div>

            <button class="back-to-top" aria-label="Back to top" on:click=move |_| browser::scroll_to_top()>
                "↑"
            </button>
        </footer>
    }
}
