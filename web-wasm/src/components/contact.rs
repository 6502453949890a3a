//! 問い合わせセクション
//!
//! 送信は擬似的なもの。待ったあとに通知してフォームを空に戻す。

use gloo::dialogs::alert;
use gloo::timers::future::TimeoutFuture;
use johnek_common::contact::{ContactForm, Field, SUBMIT_DELAY_MS, SUBMIT_SUCCESS_MESSAGE};
use johnek_common::share::{mailto, tel};
use johnek_common::types::ContactContent;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;

const OFFICE_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

#[component]
pub fn Contact(content: ContactContent) -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let problems = form.with_untracked(|f| f.validate());
        if !problems.is_empty() {
            debug!("event=contact_submit module=contact status=invalid errors={}", problems.len());
            set_errors.set(problems.iter().map(ToString::to_string).collect());
            return;
        }

        set_errors.set(Vec::new());
        set_submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS as u32).await;
            info!("event=contact_submit module=contact status=ok");
            alert(SUBMIT_SUCCESS_MESSAGE);
            set_form.set(ContactForm::default());
            set_submitting.set(false);
        });
    };

    let value = move |field: Field| move || form.with(|f| f.get(field).to_string());

    let social = [
        (content.social.linkedin.clone(), "in"),
        (content.social.instagram.clone(), "ig"),
        (content.social.twitter.clone(), "𝕏"),
    ];

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        <span>"Contact"</span>
                        " "
                        <span class="text-gold">"Us"</span>
                    </h2>
                    <p class="text-muted">{content.description.clone()}</p>
                </div>

                <div class="contact-grid">
                    <form class="contact-form" on:submit=on_submit>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="name">"Name"</label>
                                <input
                                    type="text"
                                    id="name"
                                    name=Field::Name.as_str()
                                    required
                                    prop:value=value(Field::Name)
                                    on:input=move |ev| set_form.update(|f| f.set(Field::Name, event_target_value(&ev)))
                                />
                            </div>
                            <div class="form-group">
                                <label for="email">"Email"</label>
                                <input
                                    type="email"
                                    id="email"
                                    name=Field::Email.as_str()
                                    required
                                    prop:value=value(Field::Email)
                                    on:input=move |ev| set_form.update(|f| f.set(Field::Email, event_target_value(&ev)))
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="subject">"Subject"</label>
                            <input
                                type="text"
                                id="subject"
                                name=Field::Subject.as_str()
                                required
                                prop:value=value(Field::Subject)
                                on:input=move |ev| set_form.update(|f| f.set(Field::Subject, event_target_value(&ev)))
                            />
                        </div>
                        <div class="form-group">
                            <label for="message">"Message"</label>
                            <textarea
                                id="message"
                                name=Field::Message.as_str()
                                rows="6"
                                required
                                prop:value=value(Field::Message)
                                on:input=move |ev| set_form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                            ></textarea>
                        </div>

                        <Show when=move || errors.with(|e| !e.is_empty())>
                            <ul class="form-errors">
                                {move || {
                                    errors
                                        .get()
                                        .into_iter()
                                        .map(|e| view! { <li>{e}</li> })
                                        .collect_view()
                                }}
                            </ul>
                        </Show>

                        <button type="submit" class="btn btn-dark btn-block" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>

                    <div class="contact-info">
                        <h3>"Get in Touch"</h3>
                        <div class="contact-item">
                            <p class="text-muted">"Email"</p>
                            <a href=mailto(&content.email)>{content.email.clone()}</a>
                        </div>
                        <div class="contact-item">
                            <p class="text-muted">"Phone"</p>
                            <a href=tel(&content.phone)>{content.phone.clone()}</a>
                        </div>
                        <div class="contact-item">
                            <p class="text-muted">"Address"</p>
                            <p>{content.address.clone()}</p>
                        </div>

                        <h3>"Follow Us"</h3>
                        <div class="social-links">
                            {social
                                .into_iter()
                                .map(|(href, icon)| view! { <a href=href class="social-link">{icon}</a> })
                                .collect_view()}
                        </div>

                        <div class="office-hours">
                            <h4>"Office Hours"</h4>
                            {OFFICE_HOURS
                                .iter()
                                .map(|(days, hours)| {
                                    view! {
                                        <div class="office-hours-row">
                                            <span>{*days}</span>
                                            <span>{*hours}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
