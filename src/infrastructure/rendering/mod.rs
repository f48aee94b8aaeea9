pub mod canvas_renderer;
pub mod line_geometry;

pub use canvas_renderer::{CanvasChartEngine, CanvasChartHandle};
