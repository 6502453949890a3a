//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use johnek_common::catalog::SiteData;
use johnek_site::error::SiteError;

/// 共通ライブラリのNotFoundはCLIのNotFoundに変換される
#[test]
fn test_not_found_conversion() {
    let data = SiteData::default();
    let err: SiteError = data.project("ghost-house").unwrap_err().into();

    match err {
        SiteError::NotFound { kind, slug } => {
            assert_eq!(kind, "project");
            assert_eq!(slug, "ghost-house");
        }
        other => panic!("unexpected: {:?}", other),
    }
}

/// SiteErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SiteError::Config("テスト設定エラー".to_string()),
        SiteError::ContentDirNotFound("/path/to/content".to_string()),
        SiteError::ContentFileNotFound("projects.json".to_string()),
        SiteError::NotFound { kind: "service", slug: "x".to_string() },
        SiteError::Validation(2),
        SiteError::Input("email address is invalid".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_validation_message() {
    assert_eq!(
        SiteError::Validation(3).to_string(),
        "コンテンツの検証に失敗: エラー3件"
    );
}

/// IOエラーからの変換
#[test]
fn test_from_io_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let err: SiteError = io_error.into();
    assert!(matches!(err, SiteError::Io(_)));
}
