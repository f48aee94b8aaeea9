/// Human-readable date label for a millisecond timestamp.
///
/// In the browser this is `Date.prototype.toLocaleDateString()` with the
/// user's locale. Off the browser the en-US short form (`M/D/YYYY`, UTC) is
/// used, which is also what tests assert against.
#[cfg(target_arch = "wasm32")]
pub fn format_date_label(timestamp_ms: u64) -> String {
    use js_sys::{Date, Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    // Called without arguments so the browser picks the user's locale.
    let date = Date::new(&JsValue::from_f64(timestamp_ms as f64));
    Reflect::get(&date, &JsValue::from_str("toLocaleDateString"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .and_then(|f| f.call0(&date).ok())
        .and_then(|label| label.as_string())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_date_label(timestamp_ms: u64) -> String {
    utc_date_label(timestamp_ms)
}

/// en-US style `M/D/YYYY` in UTC; empty for timestamps chrono cannot represent.
pub fn utc_date_label(timestamp_ms: u64) -> String {
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::utc_date_label;

    #[test]
    fn formats_us_short_date() {
        assert_eq!(utc_date_label(0), "1/1/1970");
        assert_eq!(utc_date_label(1_700_000_000_000), "11/14/2023");
    }

    #[test]
    fn out_of_range_timestamp_is_blank() {
        assert_eq!(utc_date_label(u64::MAX), "");
    }
}
