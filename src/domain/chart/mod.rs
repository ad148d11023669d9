//! Chart models derived from dashboard state, plus the geometry used to draw them.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
