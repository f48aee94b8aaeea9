use crate::domain::chart::ChartConfiguration;
use crate::domain::errors::ChartResult;

/// A live rendered chart. `destroy` consumes the handle, so a released chart
/// can never be touched again.
pub trait ChartHandle {
    fn destroy(self);
}

/// Rendering backend that turns a configuration into a live chart
pub trait ChartEngine {
    type Handle: ChartHandle + 'static;

    fn create(&self, config: &ChartConfiguration) -> ChartResult<Self::Handle>;
}
