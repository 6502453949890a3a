//! ページのルーティングとセクション移動
//!
//! 別ページからトップページのセクションへ移動するときは、
//! 遷移前に [`SCROLL_TARGET_KEY`] へセクションIDを書き、
//! トップページ側で一度だけ読み出して消す。

/// セッションストレージのキー
pub const SCROLL_TARGET_KEY: &str = "scrollToSection";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    ProjectDetail(String),
    ServiceDetail(String),
    NotFound,
}

impl Route {
    /// パス（`#fragment` / `?query` 付きでも可）を解釈する
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['#', '?'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["projects"] => Route::Projects,
            ["projects", slug] => Route::ProjectDetail(slug.to_string()),
            ["services", slug] => Route::ServiceDetail(slug.to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(slug) => format!("/projects/{}", slug),
            Route::ServiceDetail(slug) => format!("/services/{}", slug),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

/// トップページのセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::About, Section::Projects, Section::Services, Section::Contact];

    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// トップページ上なら `#id`、それ以外は `/#id`
pub fn nav_href(section: Section, on_home: bool) -> String {
    if on_home {
        format!("#{}", section.id())
    } else {
        format!("/#{}", section.id())
    }
}

/// ナビゲーション項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    /// 遷移前にスクロール先を保存するセクション
    pub section: Option<Section>,
}

pub fn nav_items(on_home: bool) -> Vec<NavItem> {
    vec![
        NavItem { label: "Home", href: "/".to_string(), section: None },
        NavItem { label: "About", href: nav_href(Section::About, on_home), section: Some(Section::About) },
        NavItem { label: "Projects", href: Route::Projects.href(), section: None },
        NavItem { label: "Services", href: nav_href(Section::Services, on_home), section: Some(Section::Services) },
        NavItem { label: "Contact", href: nav_href(Section::Contact, on_home), section: Some(Section::Contact) },
    ]
}

/// ケーススタディ名からプロジェクトのslugを作る（小文字化・空白→`-`）
pub fn case_study_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/projects"), Route::Projects);
        assert_eq!(Route::parse("/projects/"), Route::Projects);
        assert_eq!(
            Route::parse("/projects/sky-villa"),
            Route::ProjectDetail("sky-villa".to_string())
        );
        assert_eq!(
            Route::parse("/services/interior-design/"),
            Route::ServiceDetail("interior-design".to_string())
        );
        assert_eq!(Route::parse("/services"), Route::NotFound);
        assert_eq!(Route::parse("/a/b/c"), Route::NotFound);
    }

    #[test]
    fn test_parse_strips_fragment_and_query() {
        assert_eq!(Route::parse("/#contact"), Route::Home);
        assert_eq!(Route::parse("/projects?tab=all"), Route::Projects);
    }

    #[test]
    fn test_href_round_trip() {
        let routes = [
            Route::Home,
            Route::Projects,
            Route::ProjectDetail("museum-of-light".to_string()),
            Route::ServiceDetail("urban-planning".to_string()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }

    #[test]
    fn test_nav_href() {
        assert_eq!(nav_href(Section::Contact, true), "#contact");
        assert_eq!(nav_href(Section::Contact, false), "/#contact");
    }

    #[test]
    fn test_nav_items_off_home() {
        let items = nav_items(false);
        let about = items.iter().find(|i| i.label == "About").unwrap();
        assert_eq!(about.href, "/#about");
        assert_eq!(about.section, Some(Section::About));
        let projects = items.iter().find(|i| i.label == "Projects").unwrap();
        assert_eq!(projects.href, "/projects");
        assert_eq!(projects.section, None);
    }

    #[test]
    fn test_section_from_id() {
        assert_eq!(Section::from_id("services"), Some(Section::Services));
        assert_eq!(Section::from_id("hero"), None);
    }

    #[test]
    fn test_case_study_slug() {
        assert_eq!(case_study_slug("Museum of Light"), "museum-of-light");
    }
}
