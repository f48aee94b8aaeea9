use std::cell::Cell;
use std::rc::Rc;

use crypto_price_chart::application::{FormField, OptionsFormModel};
use crypto_price_chart::domain::market_data::{COIN_OPTIONS, Selection};
use crypto_price_chart::domain::state::SelectionStore;

#[test]
fn option_lists() {
    assert_eq!(FormField::Currency.options().len(), 10);
    assert_eq!(FormField::Currency.options()[..3], ["usd", "eur", "gbp"]);
    assert_eq!(FormField::Days.options(), vec!["7", "14", "30", "90", "180", "365"]);
    assert_eq!(COIN_OPTIONS.len(), 15);
    assert_eq!(FormField::Coin.options().len(), 14);
}

#[test]
fn prepopulates_from_store() {
    let store = SelectionStore::new(Selection::default());
    store.update("cardano", "gbp", "90");
    let form = OptionsFormModel::from_store(&store);
    assert_eq!(form.value(FormField::Coin), "cardano");
    assert_eq!(form.selected_index(FormField::Currency), Some(2));
    assert_eq!(form.selected_index(FormField::Days), Some(3));
}

#[test]
fn submit_forwards_values_verbatim() {
    let store = SelectionStore::new(Selection::default());
    let notified = Rc::new(Cell::new(0));
    let _sub = {
        let notified = Rc::clone(&notified);
        store.subscribe_to_changes(move || notified.set(notified.get() + 1))
    };

    let mut form = OptionsFormModel::from_store(&store);
    form.set(FormField::Coin, "polkadot");
    form.set(FormField::Days, "365");
    form.submit(&store);

    assert_eq!(store.current_selection(), Selection::new("polkadot", "usd", "365"));
    assert_eq!(notified.get(), 2);
}
