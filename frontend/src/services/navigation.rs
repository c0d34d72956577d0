use shared::Route;
use wasm_bindgen::JsValue;

use crate::services::logging::Logger;

/// Route matching the address bar
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

/// Record `route` in the browser history without reloading
pub fn push_route(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let result = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(route.path())));

    if let Err(e) = result {
        Logger::warn_with_component("navigation", &format!("push_state failed: {:?}", e));
    }
}
