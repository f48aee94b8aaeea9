use derive_more::Display;

/// Failures of a single render pass. None of them are fatal: the chart view
/// logs them and shows the message inline.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ChartError {
    /// Network failure or non-2xx status from the price provider
    #[display(fmt = "Fetch failed: {}", _0)]
    FetchFailed(String),
    /// Body did not carry a usable `prices` array
    #[display(fmt = "Malformed response: {}", _0)]
    MalformedResponse(String),
    /// The charting engine could not build a chart
    #[display(fmt = "Render failed: {}", _0)]
    RenderFailed(String),
}

impl std::error::Error for ChartError {}

impl ChartError {
    /// Short label used in the status line
    pub fn kind(&self) -> &'static str {
        match self {
            ChartError::FetchFailed(_) => "FetchFailed",
            ChartError::MalformedResponse(_) => "MalformedResponse",
            ChartError::RenderFailed(_) => "RenderFailed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum ConfigError {
    #[display(fmt = "Invalid configuration: {}", _0)]
    InvalidJson(String),
}

impl std::error::Error for ConfigError {}

pub type ChartResult<T> = Result<T, ChartError>;
