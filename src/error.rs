use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("コンテンツフォルダが見つかりません: {0}")]
    ContentDirNotFound(String),

    #[error("コンテンツファイルが見つかりません: {0}")]
    ContentFileNotFound(String),

    #[error("{kind}が見つかりません: {slug}")]
    NotFound { kind: &'static str, slug: String },

    #[error("コンテンツの検証に失敗: エラー{0}件")]
    Validation(usize),

    #[error("入力エラー: {0}")]
    Input(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("ログ初期化エラー: {0}")]
    Logging(String),
}

impl From<johnek_common::Error> for SiteError {
    fn from(err: johnek_common::Error) -> Self {
        match err {
            johnek_common::Error::Json(e) => SiteError::JsonParse(e),
            johnek_common::Error::NotFound { kind, slug } => SiteError::NotFound { kind, slug },
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
