#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod copy_lint;
pub mod motion;
pub mod projects;
pub mod tokens;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    if let Err(e) = motion::ProfileTable::check_builtin() {
        // leave the server-rendered page as is
        log::error!("invalid content profiles: {e}");
        return;
    }
    leptos::mount::hydrate_body(App);
}
