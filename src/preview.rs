//! タイプライター表示のターミナルプレビュー

use johnek_common::reveal::{advance, next_delay_ms, RevealConfig, RevealState};
use std::io::Write;
use std::time::Duration;

/// 表示が変わる時刻と、その時点の文字列（`until_ms` まで）
pub fn timeline(text: &str, config: &RevealConfig, until_ms: u64) -> Vec<(u64, String)> {
    let mut state = RevealState::new(text);
    let mut clock = 0u64;
    let mut frames = vec![(0, state.displayed().to_string())];

    while let Some(delay) = next_delay_ms(&state, config) {
        match clock.checked_add(delay) {
            Some(next) if next <= until_ms => clock = next,
            _ => break,
        }
        state = advance(&state, config);

        let shown = state.displayed();
        if frames.last().map(|(_, s)| s.as_str()) != Some(shown) {
            frames.push((clock, shown.to_string()));
        }
    }
    frames
}

/// 実時間で再生する。ループ時は `until_ms` で打ち切る
pub async fn play<W: Write>(
    out: &mut W,
    text: &str,
    config: &RevealConfig,
    until_ms: u64,
) -> std::io::Result<()> {
    let mut previous = 0u64;
    for (at, shown) in timeline(text, config, until_ms) {
        tokio::time::sleep(Duration::from_millis(at - previous)).await;
        previous = at;
        // 行を消してから書き直す
        write!(out, "\r\x1b[2K{}", shown)?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_non_looping() {
        let config = RevealConfig::new(10, false);
        let frames = timeline("abc", &config, u64::MAX);
        assert_eq!(
            frames,
            vec![
                (0, "".to_string()),
                (10, "a".to_string()),
                (20, "ab".to_string()),
                (30, "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_timeline_looping_skips_pause_frames() {
        let config = RevealConfig::new(10, true);
        let frames = timeline("ab", &config, 1027);
        let times: Vec<u64> = frames.iter().map(|(t, _)| *t).collect();
        // 20msで全文、1020msで削除開始、1025msで1文字消える
        assert_eq!(times, vec![0, 10, 20, 1025]);
        assert_eq!(frames.last().unwrap().1, "a");
    }

    #[test]
    fn test_timeline_huge_delay_stops_at_limit() {
        let config = RevealConfig::new(u64::MAX, false);
        let frames = timeline("ab", &config, u64::MAX);
        assert_eq!(frames, vec![(0, "".to_string()), (u64::MAX, "a".to_string())]);
    }

    #[tokio::test]
    async fn test_play_writes_final_text() {
        let mut out = Vec::new();
        play(&mut out, "hi", &RevealConfig::new(1, false), 1_000).await.unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.ends_with("hi\n"));
    }
}
