#![cfg(target_arch = "wasm32")]
use crypto_price_chart::time_utils::format_date_label;
use wasm_bindgen_test::*;
wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn matches_browser_default_locale() {
    let expected = js_sys::eval("new Date(1700000000000).toLocaleDateString()")
        .unwrap()
        .as_string()
        .unwrap();
    assert_eq!(format_date_label(1_700_000_000_000), expected);
}
