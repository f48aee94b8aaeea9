//! Chart description, the rendering-engine abstraction and the service that
//! maps a price series onto a chart.

pub mod engine;
pub mod services;
pub mod value_objects;

pub use engine::*;
pub use services::*;
pub use value_objects::*;
