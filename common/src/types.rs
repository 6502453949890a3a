//! コンテンツの型定義
//!
//! Web(WASM)とCLIで共有される型:
//! - Project / ProjectCatalog: `projects.json`
//! - Service / ServiceCatalog: `services.json`
//! - SiteContent: `content.json`（トップページの各ブロック）

use serde::{Deserialize, Serialize};

/// 一覧・検索の対象になるレコード
///
/// 読み込み後は不変。カテゴリはちょうど1つ。
pub trait ContentItem {
    fn slug(&self) -> &str;
    fn category(&self) -> &str;
    fn name(&self) -> &str;
    fn location(&self) -> &str;
    fn description(&self) -> &str;
}

/// プロジェクトの進捗
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
            ProjectStatus::Unknown => "unknown",
        }
    }

    /// バッジ用のCSSクラス
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "badge badge-completed",
            ProjectStatus::InProgress => "badge badge-in-progress",
            _ => "badge badge-planned",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// 数値ハイライト（例: 🏢 / 12 / Floors）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub icon: String,
    pub value: String,
    pub label: String,
}

/// ギャラリー素材の種類
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
    Plan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// 建築プロジェクト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub year: String,
    pub status: ProjectStatus,
    pub budget: String,
    pub area: String,
    pub client: String,
    pub architect: String,
    pub tagline: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub features: Vec<String>,
    pub stats: Vec<Stat>,
    pub gallery: Vec<GalleryItem>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub achievements: Vec<String>,
}

impl ContentItem for Project {
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCatalog {
    pub projects: Vec<Project>,
}

/// サービス提供の工程
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

/// 提供サービス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub icon: String,
    pub description: String,
    pub detailed_description: String,
    pub duration: String,
    pub price_range: String,
    pub features: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub case_studies: Vec<String>,
    pub testimonial: String,
}

impl ContentItem for Service {
    fn slug(&self) -> &str {
        &self.slug
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn name(&self) -> &str {
        &self.title
    }
    // サービスは所在地を持たない
    fn location(&self) -> &str {
        ""
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// サービスカテゴリ（color/border はスタイルトークン）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
    pub color: String,
    pub border: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCatalog {
    pub description: String,
    pub categories: Vec<ServiceCategory>,
    pub services: Vec<Service>,
}

impl ServiceCatalog {
    pub fn category(&self, id: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// カテゴリの背景色。未定義なら `bg-accent`
    pub fn category_color(&self, id: &str) -> &str {
        self.category(id).map(|c| c.color.as_str()).unwrap_or("bg-accent")
    }

    /// カテゴリの枠線色。未定義なら `border-border`
    pub fn category_border(&self, id: &str) -> &str {
        self.category(id).map(|c| c.border.as_str()).unwrap_or("border-border")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub tagline: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    pub mission: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionIntro {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: String,
    pub instagram: String,
    pub twitter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub copyright: String,
    pub tagline: String,
}

/// トップページの文言（`content.json`）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub services: SectionIntro,
    pub contact: ContactContent,
    pub footer: FooterContent,
}
