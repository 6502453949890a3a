//! 一覧ページの集計とslug検索

use crate::site::AWARDS_WON;
use crate::types::{ContentItem, Project, ProjectStatus};
use std::collections::HashSet;

/// slugで1件探す。見つからなければ `None`（「見つかりません」表示）
pub fn find_by_slug<'a, T: ContentItem>(items: &'a [T], slug: &str) -> Option<&'a T> {
    items.iter().find(|item| item.slug() == slug)
}

/// プロジェクト一覧ページの統計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub completed: usize,
    /// 所在地の先頭要素（カンマ区切り）の種類数
    pub countries: usize,
    pub awards: usize,
}

impl ProjectStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let completed = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count();
        let countries: HashSet<&str> = projects
            .iter()
            .map(|p| p.location.split(',').next().unwrap_or_default())
            .collect();

        Self {
            total: projects.len(),
            completed,
            countries: countries.len(),
            awards: AWARDS_WON,
        }
    }
}

/// カテゴリごとの件数（ボタンのバッジ表示用）
pub fn count_in_category<T: ContentItem>(items: &[T], category: &str) -> usize {
    items.iter().filter(|item| item.category() == category).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(slug: &str, location: &str, status: ProjectStatus) -> Project {
        Project {
            slug: slug.to_string(),
            location: location.to_string(),
            status,
            category: "residential".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_find_by_slug() {
        let projects = vec![
            project("sky-villa", "Dubai, UAE", ProjectStatus::Completed),
            project("dune-lodge", "Dubai, UAE", ProjectStatus::Planned),
        ];
        assert_eq!(find_by_slug(&projects, "dune-lodge").unwrap().slug, "dune-lodge");
        assert!(find_by_slug(&projects, "missing").is_none());
    }

    #[test]
    fn test_project_stats() {
        let projects = vec![
            project("a", "Dubai, UAE", ProjectStatus::Completed),
            project("b", "Dubai, UAE", ProjectStatus::InProgress),
            project("c", "Lagos, Nigeria", ProjectStatus::Completed),
            project("d", "Kyoto", ProjectStatus::Planned),
        ];
        let stats = ProjectStats::from_projects(&projects);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.countries, 3);
        assert_eq!(stats.awards, AWARDS_WON);
    }

    #[test]
    fn test_empty_stats() {
        let stats = ProjectStats::from_projects(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.countries, 0);
    }

    #[test]
    fn test_count_in_category() {
        let projects = vec![
            project("a", "x", ProjectStatus::Completed),
            Project { category: "cultural".to_string(), ..Default::default() },
        ];
        assert_eq!(count_in_category(&projects, "residential"), 1);
        assert_eq!(count_in_category(&projects, "hospitality"), 0);
    }
}
