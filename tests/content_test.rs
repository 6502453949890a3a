//! コンテンツフォルダ読み込みの統合テスト
//!
//! 同梱の `content/` と一時フォルダのコンテンツで検証

use johnek_common::filter::FilterState;
use johnek_common::{filter, ContentItem};
use johnek_site::content_dir;
use johnek_site::error::SiteError;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn bundled_content() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("content")
}

fn write_content(dir: &Path, projects: &str) {
    std::fs::write(dir.join("content.json"), r#"{"hero": {"tagline": "T", "description": "D"}}"#).unwrap();
    std::fs::write(dir.join("projects.json"), projects).unwrap();
    std::fs::write(
        dir.join("services.json"),
        r#"{"description": "", "categories": [{"id": "design", "name": "Design"}], "services": []}"#,
    )
    .unwrap();
}

/// 同梱コンテンツはエラーなしで読み込める
#[test]
fn test_bundled_content_is_valid() {
    let data = content_dir::load(&bundled_content()).expect("同梱コンテンツの読み込み失敗");
    assert!(!data.projects.projects.is_empty());
    assert!(!data.services.services.is_empty());

    let issues = content_dir::validate(&data);
    assert!(issues.is_empty(), "issues: {:?}", issues);
}

/// 同梱コンテンツで絞り込みの性質を確認
#[test]
fn test_bundled_content_filtering() {
    let data = content_dir::load(&bundled_content()).unwrap();
    let projects = &data.projects.projects;

    let all = filter(projects, &FilterState::default());
    assert_eq!(all.len(), projects.len());

    let state = FilterState::new("residential", "");
    let residential = filter(projects, &state);
    assert!(!residential.is_empty());
    assert!(residential.iter().all(|p| p.category() == "residential"));
}

/// 存在しないフォルダ
#[test]
fn test_missing_dir() {
    let result = content_dir::load(Path::new("/nonexistent/content/12345"));
    assert!(matches!(result, Err(SiteError::ContentDirNotFound(_))));
}

/// ファイルが欠けている
#[test]
fn test_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("content.json"), "{}").unwrap();

    let result = content_dir::load(dir.path());
    match result {
        Err(SiteError::ContentFileNotFound(path)) => assert!(path.ends_with("projects.json")),
        other => panic!("unexpected: {:?}", other.map(|_| ())),
    }
}

/// 壊れたJSON
#[test]
fn test_broken_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_content(dir.path(), r#"{"projects": [ {"id": 1, "#);

    let result = content_dir::load(dir.path());
    assert!(matches!(result, Err(SiteError::JsonParse(_))));
}

/// slugの書式違反は警告になる
#[test]
fn test_slug_format_warning() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_content(
        dir.path(),
        r#"{"projects": [{"id": 1, "slug": "Sky_Villa", "name": "Sky Villa", "category": "residential"}]}"#,
    );

    let data = content_dir::load(dir.path()).unwrap();
    let issues = content_dir::validate(&data);
    assert_eq!(issues.len(), 1);
    assert!(!issues[0].is_error());
    assert!(issues[0].message.contains("Sky_Villa"));
}
