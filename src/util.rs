// Small helpers shared by the views.

/// Debug log to the browser console; silent in release and off-wasm builds.
pub fn clog(msg: &str) {
    #[cfg(all(target_arch = "wasm32", debug_assertions))]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(all(target_arch = "wasm32", debug_assertions)))]
    let _ = msg;
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn copyright_line(year: u32, founder: &str, org: &str) -> String {
    format!("© {} Founded by {}. {} Org.", year, founder, org)
}
