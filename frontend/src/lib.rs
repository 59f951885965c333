use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Client entry point; mounts the app into `<body>`.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
