//! Pure geometry data for flick surfaces
//!
//! This crate contains the point/size primitives and the graphics layer
//! transform that the gesture recognizer mutates and the host renders.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{GraphicsLayer, Point, Size, TransformOrigin};
}
