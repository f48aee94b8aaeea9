//! Market data: the selection tuple, option lists, price series and the
//! provider abstraction.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
