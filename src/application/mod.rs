//! Coordination between the selection store, the options form and the chart.

pub mod chart_view;
pub mod options_form;

pub use chart_view::*;
pub use options_form::*;
