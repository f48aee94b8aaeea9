use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::domain::{
    errors::{ChartError, ChartResult},
    logging::LogComponent,
    market_data::{DEFAULT_API_BASE_URL, PriceDataProvider, PricePoint, PriceSeries, Selection},
};
use crate::log_info;

/// Body of `GET /coins/{id}/market_chart`. Only `prices` is used;
/// `market_caps` and `total_volumes` are ignored.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<(u64, f64)>,
}

/// Parse a `market_chart` body into a series
pub fn parse_market_chart(body: &str) -> ChartResult<PriceSeries> {
    let response: MarketChartResponse =
        serde_json::from_str(body).map_err(|e| ChartError::MalformedResponse(e.to_string()))?;
    Ok(response.prices.into_iter().map(PricePoint::from).collect())
}

/// CoinGecko REST client based on gloo
#[derive(Debug, Clone)]
pub struct CoinGeckoHttpClient {
    base_url: String,
}

impl Default for CoinGeckoHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl CoinGeckoHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

async fn fetch_from_url(url: String) -> ChartResult<PriceSeries> {
    log_info!(LogComponent::Infrastructure("CoinGecko"), "📈 GET {url}");

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ChartError::FetchFailed(format!("request failed: {e}")))?;

    if !response.ok() {
        return Err(ChartError::FetchFailed(format!(
            "HTTP error: {} - {}",
            response.status(),
            response.status_text()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ChartError::FetchFailed(format!("failed to read body: {e}")))?;

    let series = parse_market_chart(&body)?;

    log_info!(LogComponent::Infrastructure("CoinGecko"), "✅ {} price points", series.len());

    Ok(series)
}

impl PriceDataProvider for CoinGeckoHttpClient {
    fn fetch_market_chart(&self, selection: &Selection) -> LocalBoxFuture<'static, ChartResult<PriceSeries>> {
        Box::pin(fetch_from_url(selection.market_chart_url(&self.base_url)))
    }

    fn describe(&self, selection: &Selection) -> String {
        selection.market_chart_url(&self.base_url)
    }
}
