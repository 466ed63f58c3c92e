#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod gallery;
pub mod profile;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // a second init only happens on hot reload; keep the first logger
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    #[test]
    fn test_shell_assets_are_shipped() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in ["favicon.svg", "robots.txt"] {
            assert!(public.join(asset).is_file(), "missing public/{asset}");
        }
    }
}
