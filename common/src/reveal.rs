//! タイプライター表示
//!
//! 1tickごとに1文字ずつ表示を伸ばす。ループ時は全文表示後に一時停止し、
//! 半分の間隔で1文字ずつ消してから再び表示に戻る。
//!
//! 状態遷移は時間だけで決まるため、タイマーを使わずに
//! [`reveal_at`] で任意の経過時間の表示を求められる。

/// 既定の1文字あたりの間隔（ms）
pub const DEFAULT_DELAY_MS: u64 = 30;

/// ループ時、全文表示・全消去のあとに置く停止時間（ms）
pub const LOOP_PAUSE_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    pub delay_ms: u64,
    pub looping: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            looping: false,
        }
    }
}

impl RevealConfig {
    pub fn new(delay_ms: u64, looping: bool) -> Self {
        Self { delay_ms, looping }
    }

    /// 削除時の間隔
    pub fn delete_delay_ms(&self) -> u64 {
        self.delay_ms / 2
    }

    /// ループ1周の長さ（ms）
    fn cycle_ms(&self, len: usize) -> u64 {
        let len = len as u64;
        len.saturating_mul(self.delay_ms)
            .saturating_add(len.saturating_mul(self.delete_delay_ms()))
            .saturating_add(2 * LOOP_PAUSE_MS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Revealing,
    Pausing,
    Deleting,
    Done,
}

/// 表示状態。元の文字列が変わったら作り直す
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    pub text: String,
    /// 表示中の文字数（バイトではなく文字単位）
    pub cursor: usize,
    pub deleting: bool,
}

impl RevealState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            deleting: false,
        }
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 現在表示する文字列（先頭 `cursor` 文字）
    pub fn displayed(&self) -> &str {
        match self.text.char_indices().nth(self.cursor) {
            Some((byte_index, _)) => &self.text[..byte_index],
            None => &self.text,
        }
    }

    pub fn phase(&self, looping: bool) -> RevealPhase {
        let len = self.len();
        if !self.deleting && self.cursor < len {
            RevealPhase::Revealing
        } else if self.deleting && self.cursor > 0 {
            RevealPhase::Deleting
        } else if looping {
            RevealPhase::Pausing
        } else {
            RevealPhase::Done
        }
    }
}

/// 1tick進めた状態を返す
///
/// ループしない場合、全文表示後は同じ状態を返し続ける。
pub fn advance(state: &RevealState, config: &RevealConfig) -> RevealState {
    let mut next = state.clone();
    match state.phase(config.looping) {
        RevealPhase::Revealing => next.cursor += 1,
        RevealPhase::Deleting => next.cursor -= 1,
        RevealPhase::Pausing => next.deleting = !state.deleting,
        RevealPhase::Done => {}
    }
    next
}

/// 次のtickまでの待ち時間。終端なら `None`
pub fn next_delay_ms(state: &RevealState, config: &RevealConfig) -> Option<u64> {
    match state.phase(config.looping) {
        RevealPhase::Revealing => Some(config.delay_ms),
        RevealPhase::Deleting => Some(config.delete_delay_ms()),
        RevealPhase::Pausing => Some(LOOP_PAUSE_MS),
        RevealPhase::Done => None,
    }
}

/// 経過時間 `elapsed_ms` の時点の状態
pub fn state_at(text: &str, elapsed_ms: u64, config: &RevealConfig) -> RevealState {
    let mut state = RevealState::new(text);
    let elapsed = if config.looping {
        elapsed_ms % config.cycle_ms(state.len())
    } else {
        elapsed_ms
    };

    let mut clock = 0u64;
    while let Some(delay) = next_delay_ms(&state, config) {
        match clock.checked_add(delay) {
            Some(next) if next <= elapsed => clock = next,
            _ => break,
        }
        state = advance(&state, config);
    }
    state
}

/// 経過時間 `elapsed_ms` の時点で表示される文字列
pub fn reveal_at(text: &str, elapsed_ms: u64, config: &RevealConfig) -> String {
    state_at(text, elapsed_ms, config).displayed().to_string()
}
