//! コンテンツ一式の読み込みと整合性チェック

use crate::error::{Error, Result};
use crate::route::case_study_slug;
use crate::stats::find_by_slug;
use crate::types::{Project, ProjectCatalog, Service, ServiceCatalog, SiteContent};
use log::debug;
use std::collections::HashSet;

pub const CONTENT_FILE: &str = "content.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const SERVICES_FILE: &str = "services.json";

/// サイトの全コンテンツ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteData {
    pub content: SiteContent,
    pub projects: ProjectCatalog,
    pub services: ServiceCatalog,
}

impl SiteData {
    /// 3つのJSON文字列から読み込む
    pub fn from_json_strs(content: &str, projects: &str, services: &str) -> Result<Self> {
        let data = Self {
            content: serde_json::from_str(content)?,
            projects: serde_json::from_str(projects)?,
            services: serde_json::from_str(services)?,
        };
        debug!(
            "event=content_parse module=catalog status=ok projects={} services={}",
            data.projects.projects.len(),
            data.services.services.len()
        );
        Ok(data)
    }

    pub fn project(&self, slug: &str) -> Result<&Project> {
        find_by_slug(&self.projects.projects, slug).ok_or_else(|| Error::NotFound {
            kind: "project",
            slug: slug.to_string(),
        })
    }

    pub fn service(&self, slug: &str) -> Result<&Service> {
        find_by_slug(&self.services.services, slug).ok_or_else(|| Error::NotFound {
            kind: "service",
            slug: slug.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// 整合性チェックの指摘
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    pub fn error(message: String) -> Self {
        Self { severity: Severity::Error, message }
    }

    pub fn warning(message: String) -> Self {
        Self { severity: Severity::Warning, message }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// 詳細ページが引けなくなる不整合を洗い出す
///
/// - slug/id の重複、空のslug（エラー）
/// - 未定義のサービスカテゴリ（エラー）
/// - 対応するプロジェクトのないケーススタディ（警告）
pub fn validate(data: &SiteData) -> Vec<Issue> {
    let mut issues = Vec::new();

    check_identifiers(
        "project",
        data.projects.projects.iter().map(|p| (p.id, p.slug.as_str())),
        &mut issues,
    );
    check_identifiers(
        "service",
        data.services.services.iter().map(|s| (s.id, s.slug.as_str())),
        &mut issues,
    );

    let declared: HashSet<&str> = data.services.categories.iter().map(|c| c.id.as_str()).collect();
    for service in &data.services.services {
        if !declared.contains(service.category.as_str()) {
            issues.push(Issue::error(format!(
                "service `{}` uses undeclared category `{}`",
                service.slug, service.category
            )));
        }

        for case_study in &service.case_studies {
            let slug = case_study_slug(case_study);
            if find_by_slug(&data.projects.projects, &slug).is_none() {
                issues.push(Issue::warning(format!(
                    "service `{}` case study `{}` has no project `/projects/{}`",
                    service.slug, case_study, slug
                )));
            }
        }
    }

    issues
}

fn check_identifiers<'a>(
    kind: &str,
    items: impl Iterator<Item = (u32, &'a str)>,
    issues: &mut Vec<Issue>,
) {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    for (id, slug) in items {
        if !ids.insert(id) {
            issues.push(Issue::error(format!("duplicate {} id {}", kind, id)));
        }
        if slug.trim().is_empty() {
            issues.push(Issue::error(format!("{} id {} has an empty slug", kind, id)));
        } else if !slugs.insert(slug) {
            issues.push(Issue::error(format!("duplicate {} slug `{}`", kind, slug)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServiceCategory;

    fn data() -> SiteData {
        SiteData {
            content: SiteContent::default(),
            projects: ProjectCatalog {
                projects: vec![
                    Project { id: 1, slug: "sky-villa".into(), name: "Sky Villa".into(), ..Default::default() },
                    Project { id: 2, slug: "museum-of-light".into(), name: "Museum of Light".into(), ..Default::default() },
                ],
            },
            services: ServiceCatalog {
                description: String::new(),
                categories: vec![ServiceCategory { id: "design".into(), name: "Design".into(), ..Default::default() }],
                services: vec![Service {
                    id: 1,
                    slug: "architectural-design".into(),
                    title: "Architectural Design".into(),
                    category: "design".into(),
                    case_studies: vec!["Museum of Light".into()],
                    ..Default::default()
                }],
            },
        }
    }

    #[test]
    fn test_clean_data_has_no_issues() {
        assert!(validate(&data()).is_empty());
    }

    #[test]
    fn test_duplicate_slug_and_id() {
        let mut d = data();
        d.projects.projects.push(Project { id: 1, slug: "sky-villa".into(), ..Default::default() });
        let issues = validate(&d);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(Issue::is_error));
    }

    #[test]
    fn test_empty_slug() {
        let mut d = data();
        d.projects.projects.push(Project { id: 9, slug: " ".into(), ..Default::default() });
        let issues = validate(&d);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("empty slug"));
    }

    #[test]
    fn test_undeclared_category() {
        let mut d = data();
        d.services.services[0].category = "landscape".into();
        let issues = validate(&d);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_missing_case_study_is_warning() {
        let mut d = data();
        d.services.services[0].case_studies.push("Harbor Tower".into());
        let issues = validate(&d);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].to_string().starts_with("warning:"));
    }

    #[test]
    fn test_lookup_not_found() {
        let d = data();
        assert_eq!(d.project("sky-villa").unwrap().name, "Sky Villa");
        let err = d.service("missing").unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: "service", .. }));
    }

    #[test]
    fn test_from_json_strs() {
        let d = SiteData::from_json_strs(
            r#"{"hero": {"tagline": "Designing Tomorrow", "description": "d"}}"#,
            r#"{"projects": [{"id": 1, "slug": "a", "name": "A"}]}"#,
            r#"{"description": "s", "categories": [], "services": []}"#,
        )
        .unwrap();
        assert_eq!(d.content.hero.tagline, "Designing Tomorrow");
        assert_eq!(d.projects.projects.len(), 1);
    }

    #[test]
    fn test_from_json_strs_rejects_bad_json() {
        let result = SiteData::from_json_strs("{}", "[", "{}");
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
