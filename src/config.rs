use crate::error::{SiteError, Result};
use johnek_common::reveal::DEFAULT_DELAY_MS;
use johnek_common::site::DEFAULT_WHATSAPP_NUMBER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const WHATSAPP_NUMBER_ENV: &str = "JOHNEK_WHATSAPP_NUMBER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub whatsapp_number: String,
    pub content_dir: Option<PathBuf>,
    pub reveal_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.into(),
            content_dir: None,
            reveal_delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み。ファイルがなければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SiteError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("johnek").join("config.json"))
    }

    /// 環境変数を優先
    pub fn whatsapp_number(&self) -> String {
        match std::env::var(WHATSAPP_NUMBER_ENV) {
            Ok(number) if !number.trim().is_empty() => number,
            _ => self.whatsapp_number.clone(),
        }
    }

    /// `--content-dir` > 設定ファイル > `./content`
    pub fn resolve_content_dir(&self, cli_dir: Option<&Path>) -> PathBuf {
        cli_dir
            .map(Path::to_path_buf)
            .or_else(|| self.content_dir.clone())
            .unwrap_or_else(|| PathBuf::from("content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.reveal_delay_ms, 30);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            whatsapp_number: "+27 21 555 0100".into(),
            content_dir: Some(PathBuf::from("/srv/site/content")),
            reveal_delay_ms: 45,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"reveal_delay_ms": 10}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.reveal_delay_ms, 10);
        assert_eq!(config.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
    }

    #[test]
    fn test_content_dir_precedence() {
        let config = Config {
            content_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_content_dir(Some(Path::new("/from/cli"))),
            PathBuf::from("/from/cli")
        );
        assert_eq!(config.resolve_content_dir(None), PathBuf::from("/from/config"));
        assert_eq!(Config::default().resolve_content_dir(None), PathBuf::from("content"));
    }
}
