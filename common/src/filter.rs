//! コンテンツの絞り込み
//!
//! カテゴリと検索語の両方に一致するレコードを、入力順のまま返す。

use crate::types::ContentItem;

/// 全カテゴリを表す値
pub const ALL_CATEGORIES: &str = "all";

/// 一覧ページの絞り込み状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: String,
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }
}

impl FilterState {
    pub fn new(category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            query: query.into(),
        }
    }

    /// 「フィルタをクリア」
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        self.category == ALL_CATEGORIES && self.query.is_empty()
    }

    /// 1件の判定
    pub fn matches<T: ContentItem + ?Sized>(&self, item: &T) -> bool {
        let category_ok = self.category == ALL_CATEGORIES || item.category() == self.category;
        if !category_ok {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }

        let needle = self.query.to_lowercase();
        [item.name(), item.location(), item.description()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// 絞り込み（安定・並び替えなし）
///
/// 空の結果も正常値。呼び出し側で空状態の表示に使う。
pub fn filter<'a, T: ContentItem>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    items.iter().filter(|item| state.matches(*item)).collect()
}

/// `["all", ...]` の後にカテゴリを初出順で並べる
pub fn categories<T: ContentItem>(items: &[T]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        let category = item.category();
        if !out.iter().any(|c| c == category) {
            out.push(category.to_string());
        }
    }
    out
}

/// 先頭 `limit` 件（トップページのおすすめ表示）
pub fn featured<'a, T: ContentItem>(
    items: &'a [T],
    state: &FilterState,
    limit: usize,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| state.matches(*item))
        .take(limit)
        .collect()
}

/// ボタン表示用に先頭を大文字化（"residential" → "Residential"）
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Project, Service};

    fn project(id: u32, category: &str, name: &str, location: &str, description: &str) -> Project {
        Project {
            id,
            slug: format!("project-{}", id),
            name: name.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "residential", "Sky Villa", "Dubai, UAE", "Cantilevered family home"),
            project(2, "commercial", "Harbor Tower", "Lagos, Nigeria", "Mixed-use office tower"),
            project(3, "cultural", "Museum of Light", "Kyoto, Japan", "Gallery spaces lit from above"),
            project(4, "residential", "Garden Court", "Nairobi, Kenya", "Courtyard housing with a rooftop garden"),
            project(5, "hospitality", "Dune Lodge", "Dubai, UAE", "Desert retreat"),
        ]
    }

    fn ids(items: &[&Project]) -> Vec<u32> {
        items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_state_is_identity() {
        let items = sample();
        let result = filter(&items, &FilterState::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_by_category() {
        let items = sample();
        let result = filter(&items, &FilterState::new("residential", ""));
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let items = sample();
        let result = filter(&items, &FilterState::new("all", "dUBAI"));
        assert_eq!(ids(&result), vec![1, 5]);
    }

    #[test]
    fn test_query_matches_description() {
        let items = sample();
        let result = filter(&items, &FilterState::new("all", "rooftop"));
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn test_category_and_query_both_required() {
        let items = sample();
        let result = filter(&items, &FilterState::new("hospitality", "villa"));
        assert!(result.is_empty());

        let result = filter(&items, &FilterState::new("residential", "villa"));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let items = sample();
        assert!(filter(&items, &FilterState::new("industrial", "")).is_empty());
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let items = sample();
        let states = [
            FilterState::new("all", "a"),
            FilterState::new("residential", "o"),
            FilterState::new("commercial", ""),
            FilterState::new("all", "zzz"),
        ];

        for state in &states {
            let result = ids(&filter(&items, state));
            let mut last = 0;
            for id in &result {
                assert!(*id > last, "order broken for {:?}", state);
                last = *id;
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample();
        let state = FilterState::new("residential", "garden");

        let once: Vec<Project> = filter(&items, &state).into_iter().cloned().collect();
        let twice = filter(&once, &state);
        assert_eq!(ids(&twice), vec![4]);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_service_never_matches_on_location() {
        let services = vec![Service {
            slug: "urban-planning".to_string(),
            title: "Urban Planning".to_string(),
            category: "planning".to_string(),
            description: "Master plans for growing cities".to_string(),
            ..Default::default()
        }];

        assert_eq!(filter(&services, &FilterState::new("all", "cities")).len(), 1);
        assert_eq!(filter(&services, &FilterState::new("all", "urban")).len(), 1);
        assert!(filter(&services, &FilterState::new("all", "dubai")).is_empty());
    }

    #[test]
    fn test_reset() {
        let mut state = FilterState::new("cultural", "museum");
        assert!(!state.is_default());
        state.reset();
        assert!(state.is_default());
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let items = sample();
        assert_eq!(
            categories(&items),
            vec!["all", "residential", "commercial", "cultural", "hospitality"]
        );
    }

    #[test]
    fn test_featured_limit() {
        let items = sample();
        let result = featured(&items, &FilterState::default(), 3);
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("residential"), "Residential");
        assert_eq!(category_label("all"), "All");
        assert_eq!(category_label(""), "");
    }
}
