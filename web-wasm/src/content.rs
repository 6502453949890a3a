//! ビルド時に埋め込むサイトコンテンツ

use johnek_common::SiteData;
use log::error;
use std::sync::OnceLock;

static SITE: OnceLock<SiteData> = OnceLock::new();

/// 埋め込みJSONを一度だけ読み込む。壊れていれば空のコンテンツ
pub fn site() -> &'static SiteData {
    SITE.get_or_init(|| {
        SiteData::from_json_strs(
            include_str!("../../content/content.json"),
            include_str!("../../content/projects.json"),
            include_str!("../../content/services.json"),
        )
        .unwrap_or_else(|e| {
            error!("event=content_load module=content status=error error={}", e);
            SiteData::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use johnek_common::catalog::validate;

    #[test]
    fn test_embedded_content_loads() {
        let site = site();
        assert!(!site.projects.projects.is_empty());
        assert!(!site.services.services.is_empty());
        assert!(!site.content.hero.tagline.is_empty());
    }

    #[test]
    fn test_embedded_content_has_no_errors() {
        let errors: Vec<_> = validate(site()).into_iter().filter(|i| i.is_error()).collect();
        assert!(errors.is_empty(), "errors: {:?}", errors);
    }
}
