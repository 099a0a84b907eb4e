#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod chrome;
pub mod dom;
pub mod form;
pub mod media;
pub mod navigation;
pub mod scroll_effects;
pub mod storage;

pub use bootstrap::{init_page, init_page_with, load_config};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }
    if let Err(err) = bootstrap::init_when_ready() {
        dom::console_error(&format!("sitefx failed to start: {err}"));
    }
}
