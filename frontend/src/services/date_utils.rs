use chrono::{DateTime, Utc};
use js_sys::Date;
use wasm_bindgen::JsValue;

/// Current time from the browser clock
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Date::now() as i64).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Tooltip text for the creation time, in the player's locale
/// (e.g. "Created At: 3/1/2024 12:00:00 PM")
pub fn format_created_at(created_at: DateTime<Utc>) -> String {
    let date = Date::new(&JsValue::from_f64(created_at.timestamp_millis() as f64));
    let day = String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED));
    let time = String::from(date.to_locale_time_string("default"));
    format!("Created At: {} {}", day, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_now_is_after_epoch() {
        assert!(now_utc() > DateTime::<Utc>::UNIX_EPOCH);
    }

    #[wasm_bindgen_test]
    fn test_created_at_prefix() {
        let text = format_created_at(DateTime::<Utc>::UNIX_EPOCH);
        assert!(text.starts_with("Created At: "));
    }
}
