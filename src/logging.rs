//! CLIのログ初期化
//!
//! 標準エラーへ出力する。`RUST_LOG` があればそちらを優先。
//! メッセージは `event=... module=... status=...` 形式で揃える。

use crate::error::{SiteError, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;

/// ログレベル文字列（`--verbose` で debug）
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// 返り値のハンドルは main の終わりまで保持すること
pub fn init_logging(verbose: bool) -> Result<LoggerHandle> {
    let level = level_for(verbose);
    let handle = Logger::try_with_env_or_str(level)
        .map_err(|err| SiteError::Logging(format!("invalid log level `{level}`: {err}")))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| SiteError::Logging(format!("failed to start logger: {err}")))?;

    debug!(
        "event=cli_start module=cli status=ok level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(true), "debug");
        assert_eq!(level_for(false), "warn");
    }
}
