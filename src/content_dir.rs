//! コンテンツフォルダの読み込み
//!
//! `content.json` / `projects.json` / `services.json` の3ファイルを読む。

use crate::error::{SiteError, Result};
use johnek_common::catalog::{self, Issue, SiteData, CONTENT_FILE, PROJECTS_FILE, SERVICES_FILE};
use johnek_common::ContentItem;
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::path::Path;

lazy_static! {
    /// URLに使えるslug（小文字英数字をハイフンで区切る）
    static ref SLUG_PATTERN: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

pub fn load(dir: &Path) -> Result<SiteData> {
    if !dir.is_dir() {
        return Err(SiteError::ContentDirNotFound(dir.display().to_string()));
    }

    let content = read_file(dir, CONTENT_FILE)?;
    let projects = read_file(dir, PROJECTS_FILE)?;
    let services = read_file(dir, SERVICES_FILE)?;

    let data = SiteData::from_json_strs(&content, &projects, &services)?;
    info!(
        "event=content_load module=content_dir status=ok dir={} projects={} services={}",
        dir.display(),
        data.projects.projects.len(),
        data.services.services.len()
    );
    Ok(data)
}

fn read_file(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(SiteError::ContentFileNotFound(path.display().to_string()));
    }
    debug!("event=content_read module=content_dir file={}", path.display());
    Ok(std::fs::read_to_string(&path)?)
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

/// 共通の整合性チェックに、slug書式のチェックを加える
pub fn validate(data: &SiteData) -> Vec<Issue> {
    let mut issues = catalog::validate(data);
    lint_slugs("project", &data.projects.projects, &mut issues);
    lint_slugs("service", &data.services.services, &mut issues);
    issues
}

fn lint_slugs<T: ContentItem>(kind: &str, items: &[T], issues: &mut Vec<Issue>) {
    for item in items {
        let slug = item.slug();
        // 空のslugは共通チェックで報告済み
        if !slug.trim().is_empty() && !is_valid_slug(slug) {
            issues.push(Issue::warning(format!(
                "{} slug `{}` is not lowercase-hyphenated",
                kind, slug
            )));
        }
    }
}
