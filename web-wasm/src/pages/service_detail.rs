//! サービス詳細ページ

use crate::browser;
use crate::components::not_found::NotFound;
use crate::components::tabs::{TabBar, TabKind};
use crate::components::whatsapp_button::WhatsAppButton;
use crate::content;
use johnek_common::route::{case_study_slug, nav_href};
use johnek_common::scroll::{past_offset, HEADER_COMPACT_OFFSET, SERVICE_REVEAL_FRACTION};
use johnek_common::site::DEFAULT_WHATSAPP_NUMBER;
use johnek_common::{Route, Section, Service, WhatsAppLink};
use leptos::prelude::*;
use log::{info, warn};

const WHAT_TO_EXPECT: [&str; 4] = [
    "Regular progress updates and reviews",
    "Clear communication and documentation",
    "Expert guidance at every stage",
    "Quality assurance and final delivery",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceTab {
    Overview,
    Process,
    Features,
    CaseStudies,
}

impl TabKind for ServiceTab {
    fn label(&self) -> &'static str {
        match self {
            ServiceTab::Overview => "📋 Overview",
            ServiceTab::Process => "🔄 Our Process",
            ServiceTab::Features => "✨ Features",
            ServiceTab::CaseStudies => "📚 Case Studies",
        }
    }
}

#[component]
pub fn ServiceDetailPage(slug: String) -> impl IntoView {
    match content::site().service(&slug) {
        Ok(service) => {
            info!("event=service_view module=service_detail status=ok slug={}", slug);
            view! { <ServiceDetail service=service /> }.into_any()
        }
        Err(e) => {
            warn!("event=service_view module=service_detail status=not_found error={}", e);
            view! { <NotFound kind="Service" /> }.into_any()
        }
    }
}

#[component]
fn ServiceDetail(service: &'static Service) -> impl IntoView {
    let catalog = &content::site().services;
    let category = catalog.category(&service.category);
    let category_name = category.map(|c| c.name.clone()).unwrap_or_default();
    let icon_class = format!(
        "service-icon-box {} {}",
        catalog.category_color(&service.category),
        catalog.category_border(&service.category)
    );

    let whatsapp = WhatsAppLink::service_inquiry(DEFAULT_WHATSAPP_NUMBER, &service.title);
    let whatsapp_url = whatsapp.url();

    let scroll_y = browser::use_scroll_y();
    let compact = move || past_offset(scroll_y.get(), HEADER_COMPACT_OFFSET);

    let (tab, set_tab) = signal(ServiceTab::Overview);
    let tabs = vec![
        ServiceTab::Overview,
        ServiceTab::Process,
        ServiceTab::Features,
        ServiceTab::CaseStudies,
    ];
    let body = move || match tab.get() {
        ServiceTab::Overview => view! { <OverviewTab service=service /> }.into_any(),
        ServiceTab::Process => view! { <ProcessTab service=service /> }.into_any(),
        ServiceTab::Features => view! { <FeaturesTab service=service /> }.into_any(),
        ServiceTab::CaseStudies => view! { <CaseStudiesTab service=service /> }.into_any(),
    };

    let attribution = format!(
        "- Satisfied Client, {}",
        service.case_studies.first().map(String::as_str).unwrap_or("Recent Project")
    );

    view! {
        <div class="page detail-page">
            <WhatsAppButton link=whatsapp fraction=SERVICE_REVEAL_FRACTION />

            <div class="container">
                <a
                    href=nav_href(Section::Services, false)
                    class="back-link"
                    on:click=move |_| browser::store_scroll_target(Section::Services)
                >
                    "← Back to Services"
                </a>

                <div class="detail-header">
                    <div>
                        <div class="detail-title-row">
                            <div class=icon_class>{service.icon.clone()}</div>
                            <div>
                                <span class=format!("category-chip {}", catalog.category_color(&service.category))>
                                    {category_name}
                                </span>
                                <h1>{service.title.clone()}</h1>
                            </div>
                        </div>
                        <p class="detail-tagline text-gold">{service.description.clone()}</p>
                        <p class="detail-lead">{service.detailed_description.clone()}</p>
                    </div>

                    <div class="quick-info">
                        <h3>"Service Details"</h3>
                        <div class="quick-info-item">
                            <div class="text-muted">"Starting Price"</div>
                            <div class="text-gold">{service.price_range.clone()}</div>
                        </div>
                        <div class="quick-info-item">
                            <div class="text-muted">"Duration"</div>
                            <div>{service.duration.clone()}</div>
                        </div>
                        <div class="quick-info-item">
                            <div class="text-muted">"Case Studies"</div>
                            <div>{format!("{} completed projects", service.case_studies.len())}</div>
                        </div>
                        <a href=whatsapp_url.clone() target="_blank" rel="noopener noreferrer" class="btn btn-whatsapp-soft">
                            "Quick WhatsApp Inquiry"
                        </a>
                    </div>
                </div>

                <div class="mobile-quote" class:visible=compact>
                    <div>
                        <p>"Get Instant Quote"</p>
                        <p class="text-muted">"Response within 15 minutes"</p>
                    </div>
                    <a href=whatsapp_url.clone() target="_blank" rel="noopener noreferrer" class="btn btn-light">
                        "Chat Now"
                    </a>
                </div>

                <TabBar tabs=tabs active=tab set_active=set_tab />
                <div class="tab-panel">{body}</div>

                <div class="testimonial">
                    <blockquote>{service.testimonial.clone()}</blockquote>
                    <div class="text-muted">{attribution}</div>
                </div>

                <div class="whatsapp-cta">
                    <div>
                        <h3>"Get Instant Response"</h3>
                        <p class="text-muted">
                            "Chat with our experts directly on WhatsApp. Get instant quotes and answers to your questions."
                        </p>
                    </div>
                    <a href=whatsapp_url target="_blank" rel="noopener noreferrer" class="btn btn-whatsapp">
                        "Start WhatsApp Chat"
                    </a>
                </div>

                <div class="section-footer">
                    <a
                        href=nav_href(Section::Contact, false)
                        class="btn btn-primary"
                        on:click=move |_| browser::store_scroll_target(Section::Contact)
                    >
                        {format!("Get Started with {}", service.title)}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn OverviewTab(service: &'static Service) -> impl IntoView {
    view! {
        <div class="overview-grid">
            <div>
                <h3>"Service Overview"</h3>
                <p>{service.detailed_description.clone()}</p>
                <p>
                    "Our approach combines technical expertise with creative problem-solving to deliver exceptional results. We work closely with clients throughout the process, ensuring alignment with your vision and objectives."
                </p>
            </div>
            <div class="panel panel-gold">
                <h4>"What to Expect"</h4>
                <ul class="dot-list">
                    {WHAT_TO_EXPECT.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn ProcessTab(service: &'static Service) -> impl IntoView {
    let last = service.process.iter().map(|s| s.step).max().unwrap_or_default();
    view! {
        <div>
            <h3>{format!("Our {}-Step Process", service.process.len())}</h3>
            <div class="process-grid">
                {service
                    .process
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="process-step" class:first={step.step == 1}>
                                <div class="process-number">{step.step}</div>
                                <h4>{step.title.clone()}</h4>
                                <p>{step.description.clone()}</p>
                                <Show when=move || { step.step < last }>
                                    <span class="process-arrow">"→"</span>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FeaturesTab(service: &'static Service) -> impl IntoView {
    view! {
        <div>
            <h3>"Key Features & Benefits"</h3>
            <div class="feature-grid">
                {service
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-icon">"✨"</div>
                                <h4>{feature.clone()}</h4>
                                <p>"Comprehensive implementation with measurable results and ongoing support."</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CaseStudiesTab(service: &'static Service) -> impl IntoView {
    let summary = format!(
        "This project showcases our expertise in {} with exceptional results.",
        service.title.to_lowercase()
    );
    view! {
        <div>
            <h3>"Featured Case Studies"</h3>
            <div class="case-study-grid">
                {service
                    .case_studies
                    .iter()
                    .map(|title| {
                        let href = Route::ProjectDetail(case_study_slug(title)).href();
                        view! {
                            <div class="case-study-card">
                                <div class="media-placeholder"></div>
                                <h4>{title.clone()}</h4>
                                <p>{summary.clone()}</p>
                                <a href=href class="text-gold">"View Case Study →"</a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
