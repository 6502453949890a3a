//! window / document / sessionStorage の薄いラッパー
//!
//! どれもベストエフォートで、取れなければ既定値に落とす。

use gloo::storage::{SessionStorage, Storage};
use johnek_common::route::SCROLL_TARGET_KEY;
use johnek_common::Section;
use leptos::prelude::*;
use log::{debug, warn};

pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn document_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|e| f64::from(e.scroll_height()))
        .unwrap_or(0.0)
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            warn!("event=navigate module=browser status=error href={} error={:?}", href, e);
        }
    }
}

/// `id` の要素までスクロール。要素がなければ何もしない
pub fn scroll_to_section(section: Section) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));
    match element {
        Some(element) => element.scroll_into_view(),
        None => debug!("event=scroll module=browser status=skip section={}", section.id()),
    }
}

/// 遷移先のトップページで使うスクロール先を保存
pub fn store_scroll_target(section: Section) {
    if let Err(e) = SessionStorage::set(SCROLL_TARGET_KEY, section.id()) {
        warn!("event=scroll_target_store module=browser status=error error={}", e);
    }
}

/// 保存済みのスクロール先を読み出して消す。なければURLの `#id`
pub fn take_scroll_target() -> Option<Section> {
    let stored = SessionStorage::get::<String>(SCROLL_TARGET_KEY).ok();
    SessionStorage::delete(SCROLL_TARGET_KEY);

    stored
        .as_deref()
        .and_then(Section::from_id)
        .or_else(|| Section::from_id(hash().trim_start_matches('#')))
}

/// スクロール位置を追うシグナル
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (y, set_y) = signal(scroll_y());
    let handle = window_event_listener(leptos::ev::scroll, move |_| set_y.set(scroll_y()));
    on_cleanup(move || handle.remove());
    y
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_scroll_target_is_taken_once() {
        store_scroll_target(Section::Services);
        assert_eq!(take_scroll_target(), Some(Section::Services));
        assert_eq!(SessionStorage::get::<String>(SCROLL_TARGET_KEY).ok(), None);
    }

    #[wasm_bindgen_test]
    fn wasm_unknown_scroll_target_is_ignored() {
        SessionStorage::set(SCROLL_TARGET_KEY, "gallery").expect("storage");
        assert_eq!(take_scroll_target(), None);
    }
}
