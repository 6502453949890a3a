//! 一覧・詳細のテキスト表示

use johnek_common::catalog::SiteData;
use johnek_common::filter::{self, category_label, FilterState};
use johnek_common::share::WhatsAppLink;
use johnek_common::stats::ProjectStats;
use johnek_common::{Project, Service};
use std::fmt::Write;

pub const EMPTY_PROJECTS: &str = "No Projects Found - try adjusting your search or filter criteria";
pub const EMPTY_SERVICES: &str = "No Services Found - try adjusting your search or filter criteria";

/// プロジェクト一覧（統計付き）
pub fn project_list(data: &SiteData, state: &FilterState) -> String {
    let projects = &data.projects.projects;
    let matched = filter::filter(projects, state);
    let stats = ProjectStats::from_projects(projects);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Projects: {} total / {} completed / {} countries / {} awards",
        stats.total, stats.completed, stats.countries, stats.awards
    );
    let labels: Vec<String> = filter::categories(projects)
        .iter()
        .map(|c| category_label(c))
        .collect();
    let _ = writeln!(out, "Categories: {}", labels.join(", "));
    let _ = writeln!(out);

    if matched.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_PROJECTS);
        return out;
    }

    for project in matched {
        let _ = writeln!(
            out,
            "{:<24} {:<12} {:<12} {:<26} {}",
            project.slug,
            project.category,
            project.status,
            project.location,
            project.year
        );
    }
    out
}

/// サービス一覧（カテゴリ別件数付き）
pub fn service_list(data: &SiteData, state: &FilterState) -> String {
    let catalog = &data.services;
    let matched = filter::filter(&catalog.services, state);

    let mut out = String::new();
    let mut counts = vec![format!("All Services ({})", catalog.services.len())];
    for category in &catalog.categories {
        counts.push(format!(
            "{} ({})",
            category.name,
            johnek_common::stats::count_in_category(&catalog.services, &category.id)
        ));
    }
    let _ = writeln!(out, "{}", counts.join(" | "));
    let _ = writeln!(out);

    if matched.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_SERVICES);
        return out;
    }

    for service in matched {
        let category = catalog
            .category(&service.category)
            .map(|c| c.name.as_str())
            .unwrap_or(service.category.as_str());
        let _ = writeln!(
            out,
            "{} {:<28} {:<12} {}",
            service.icon, service.slug, category, service.title
        );
    }
    out
}

pub fn project_detail(project: &Project, whatsapp_number: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", project.name);
    let _ = writeln!(out, "{}", project.tagline);
    let _ = writeln!(
        out,
        "[{}] {} · {} · {}",
        project.status, project.category, project.location, project.year
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", project.long_description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Budget: {}   Area: {}", project.budget, project.area);
    let _ = writeln!(out, "Client: {}   Lead Architect: {}", project.client, project.architect);

    if !project.stats.is_empty() {
        let stats: Vec<String> = project
            .stats
            .iter()
            .map(|s| format!("{} {} {}", s.icon, s.value, s.label))
            .collect();
        let _ = writeln!(out, "Stats: {}", stats.join(" | "));
    }
    write_list(&mut out, "Key Features", &project.features);
    write_list(&mut out, "Challenges Faced", &project.challenges);
    write_list(&mut out, "Our Solutions", &project.solutions);
    write_list(&mut out, "Achievements & Awards", &project.achievements);

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Quick Inquiry: {}",
        WhatsAppLink::project_inquiry(whatsapp_number, &project.name).url()
    );
    out
}

pub fn service_detail(data: &SiteData, service: &Service, whatsapp_number: &str) -> String {
    let mut out = String::new();
    let category = data
        .services
        .category(&service.category)
        .map(|c| c.name.as_str())
        .unwrap_or(service.category.as_str());

    let _ = writeln!(out, "{} {}", service.icon, service.title);
    let _ = writeln!(out, "{}", category);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", service.detailed_description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Duration: {}   Investment: {}", service.duration, service.price_range);
    let _ = writeln!(out, "{} completed projects", service.case_studies.len());

    if !service.process.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Our Process:");
        for step in &service.process {
            let _ = writeln!(out, "  {}. {} - {}", step.step, step.title, step.description);
        }
    }
    write_list(&mut out, "Features", &service.features);
    write_list(&mut out, "Case Studies", &service.case_studies);

    if !service.testimonial.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "\"{}\" - Satisfied Client, {}",
            service.testimonial,
            service.case_studies.first().map(String::as_str).unwrap_or("Recent Project")
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Quick WhatsApp Inquiry: {}",
        WhatsAppLink::service_inquiry(whatsapp_number, &service.title).url()
    );
    out
}

fn write_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", title);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use johnek_common::types::{ProjectCatalog, ServiceCatalog, ServiceCategory};
    use johnek_common::ProjectStatus;

    fn data() -> SiteData {
        SiteData {
            projects: ProjectCatalog {
                projects: vec![
                    Project {
                        id: 1,
                        slug: "sky-villa".into(),
                        name: "Sky Villa".into(),
                        category: "residential".into(),
                        location: "Dubai, UAE".into(),
                        status: ProjectStatus::Completed,
                        features: vec!["Infinity pool".into()],
                        ..Default::default()
                    },
                    Project {
                        id: 2,
                        slug: "harbor-tower".into(),
                        name: "Harbor Tower".into(),
                        category: "commercial".into(),
                        location: "Lagos, Nigeria".into(),
                        ..Default::default()
                    },
                ],
            },
            services: ServiceCatalog {
                categories: vec![ServiceCategory { id: "design".into(), name: "Design".into(), ..Default::default() }],
                services: vec![Service {
                    slug: "interior-design".into(),
                    title: "Interior Design".into(),
                    category: "design".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_project_list_filters() {
        let out = project_list(&data(), &FilterState::new("commercial", ""));
        assert!(out.contains("harbor-tower"));
        assert!(!out.contains("sky-villa"));
        assert!(out.contains("Categories: All, Residential, Commercial"));
        assert!(out.contains("2 total / 1 completed / 2 countries"));
    }

    #[test]
    fn test_project_list_empty_state() {
        let out = project_list(&data(), &FilterState::new("all", "nothing matches"));
        assert!(out.contains(EMPTY_PROJECTS));
    }

    #[test]
    fn test_service_list_counts() {
        let out = service_list(&data(), &FilterState::default());
        assert!(out.contains("All Services (1) | Design (1)"));
        assert!(out.contains("interior-design"));
    }

    #[test]
    fn test_project_detail_has_inquiry_link() {
        let d = data();
        let out = project_detail(&d.projects.projects[0], "+1234567890");
        assert!(out.contains("Key Features:"));
        assert!(out.contains("https://wa.me/1234567890?text="));
        assert!(!out.contains("Challenges Faced"));
    }

    #[test]
    fn test_service_detail_testimonial_fallback() {
        let mut d = data();
        d.services.services[0].testimonial = "Lovely".into();
        let service = d.services.services[0].clone();
        let out = service_detail(&d, &service, "1");
        assert!(out.contains("\"Lovely\" - Satisfied Client, Recent Project"));
        assert!(out.contains("Design"));
    }
}
