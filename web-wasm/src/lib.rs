//! Johnek Architects Web Site (Leptos + WASM)

mod app;
mod browser;
mod components;
mod content;
mod logger;
mod pages;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    leptos::mount::mount_to_body(app::App);
}
