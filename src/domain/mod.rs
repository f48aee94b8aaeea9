//! Pure, DOM-free core: selection state, market data, chart description,
//! errors and logging abstractions.

pub mod chart;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod state;
