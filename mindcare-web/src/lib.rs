#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod logging;
pub mod pages;
pub mod router;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    // Set <html lang> from the saved preference before the first paint.
    i18n::apply_document_lang(mindcare_core::load_locale(&storage::BrowserStore));
    yew::Renderer::<app::App>::new().render();
}
