//! 一文字ずつ表示するテキスト
//!
//! 状態遷移は `johnek_common::reveal` に任せ、ここではタイマーで1tickずつ進めるだけ。
//! 状態が変わるたびに前のタイマーを捨てて次を仕掛ける。

use johnek_common::reveal::{advance, next_delay_ms, RevealConfig, RevealState, DEFAULT_DELAY_MS};
use leptos::prelude::*;
use log::warn;
use std::time::Duration;

#[component]
pub fn Typewriter(
    text: String,
    #[prop(default = DEFAULT_DELAY_MS)] delay: u64,
    #[prop(optional)] infinite: bool,
) -> impl IntoView {
    let config = RevealConfig::new(delay, infinite);
    let (state, set_state) = signal(RevealState::new(text));

    Effect::new(move |_| {
        let Some(wait) = state.with(|s| next_delay_ms(s, &config)) else {
            return;
        };
        let tick = move || set_state.update(|s| *s = advance(s, &config));
        match set_timeout_with_handle(tick, Duration::from_millis(wait)) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => warn!("event=typewriter_tick module=typewriter status=error error={:?}", e),
        }
    });

    view! {
        <span class="typewriter">{move || state.with(|s| s.displayed().to_string())}</span>
    }
}
