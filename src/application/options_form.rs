use crate::domain::{
    logging::LogComponent,
    market_data::{DayRange, VsCurrency, distinct_coin_options},
    state::SelectionStore,
};
use crate::log_info;

/// One of the three choice fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Coin,
    Currency,
    Days,
}

impl FormField {
    /// Values offered by the `<select>` for this field
    pub fn options(self) -> Vec<&'static str> {
        match self {
            FormField::Coin => distinct_coin_options(),
            FormField::Currency => VsCurrency::options(),
            FormField::Days => DayRange::options(),
        }
    }
}

/// Values currently chosen in the options form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsFormModel {
    pub coin: String,
    pub currency: String,
    pub days: String,
}

impl OptionsFormModel {
    /// Pre-populate from the store. Values outside the option lists are kept
    /// as-is; such a field just shows no selected option.
    pub fn from_store(store: &SelectionStore) -> Self {
        let selection = store.current_selection();
        Self { coin: selection.coin, currency: selection.currency, days: selection.days }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Coin => &self.coin,
            FormField::Currency => &self.currency,
            FormField::Days => &self.days,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Coin => self.coin = value,
            FormField::Currency => self.currency = value,
            FormField::Days => self.days = value,
        }
    }

    /// Position of the current value in the field's option list
    pub fn selected_index(&self, field: FormField) -> Option<usize> {
        let value = self.value(field);
        field.options().iter().position(|o| *o == value)
    }

    /// Forward the chosen values verbatim. Always notifies, even when nothing changed.
    pub fn submit(&self, store: &SelectionStore) {
        log_info!(
            LogComponent::Application("OptionsForm"),
            "📝 Submitting {}/{}/{}",
            self.coin,
            self.currency,
            self.days
        );
        store.update(&self.coin, &self.currency, &self.days);
    }
}
