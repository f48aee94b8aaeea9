use futures::future::LocalBoxFuture;

use crate::domain::errors::ChartResult;
use crate::domain::market_data::{PriceSeries, Selection};

/// Source of price history for a selection.
///
/// The returned future owns everything it needs, so it can outlive the call
/// and be driven by `spawn_local`.
pub trait PriceDataProvider {
    fn fetch_market_chart(&self, selection: &Selection) -> LocalBoxFuture<'static, ChartResult<PriceSeries>>;

    /// URL the provider would hit for `selection`, for logs and diagnostics
    fn describe(&self, selection: &Selection) -> String;
}

impl<P: PriceDataProvider + ?Sized> PriceDataProvider for std::rc::Rc<P> {
    fn fetch_market_chart(&self, selection: &Selection) -> LocalBoxFuture<'static, ChartResult<PriceSeries>> {
        (**self).fetch_market_chart(selection)
    }

    fn describe(&self, selection: &Selection) -> String {
        (**self).describe(selection)
    }
}
