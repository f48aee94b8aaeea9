#![cfg(target_arch = "wasm32")]
use std::cell::Cell;
use std::rc::Rc;

use crypto_price_chart::event_utils::on_window_resize;
use wasm_bindgen_test::*;
wasm_bindgen_test_configure!(run_in_browser);

fn fire_resize() {
    let window = web_sys::window().unwrap();
    window.dispatch_event(&web_sys::Event::new("resize").unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn dropped_listener_stops_receiving_events() {
    let hits = Rc::new(Cell::new(0));
    let listener = {
        let hits = Rc::clone(&hits);
        on_window_resize(move |_| hits.set(hits.get() + 1)).unwrap()
    };

    fire_resize();
    assert_eq!(hits.get(), 1);

    drop(listener);
    fire_resize();
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn detach_removes_listener() {
    let hits = Rc::new(Cell::new(0));
    let listener = {
        let hits = Rc::clone(&hits);
        on_window_resize(move |_| hits.set(hits.get() + 1)).unwrap()
    };
    listener.detach();
    fire_resize();
    assert_eq!(hits.get(), 0);
}
