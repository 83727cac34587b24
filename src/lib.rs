#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod clipboard;
pub mod content;
pub mod locale;
pub mod nav;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    if let Err(e) = locale::Catalog::global() {
        log::error!("refusing to hydrate: {e}");
        return;
    }
    leptos::mount::hydrate_body(App);
}
