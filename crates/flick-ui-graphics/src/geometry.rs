//! Geometric primitives: Point, Size, TransformOrigin, GraphicsLayer

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Pivot of a layer's rotation, as fractions of the layer's width/height.
///
/// `(0.5, 0.0)` is the horizontal centre of the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformOrigin {
    pub pivot_fraction_x: f32,
    pub pivot_fraction_y: f32,
}

impl TransformOrigin {
    pub const fn new(pivot_fraction_x: f32, pivot_fraction_y: f32) -> Self {
        Self {
            pivot_fraction_x,
            pivot_fraction_y,
        }
    }

    pub const CENTER: TransformOrigin = TransformOrigin::new(0.5, 0.5);
    pub const TOP_CENTER: TransformOrigin = TransformOrigin::new(0.5, 0.0);

    /// Whether the pivot sits on the top edge (y = 0).
    pub fn is_on_top_edge(&self) -> bool {
        self.pivot_fraction_y == 0.0
    }
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Render-time transform of a surface.
///
/// `rotation_z` is in degrees, positive values rotate clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub translation_x: f32,
    pub translation_y: f32,
    pub rotation_z: f32,
    pub transform_origin: TransformOrigin,
}

impl GraphicsLayer {
    /// Returns the layer with translation and rotation cleared.
    pub fn at_rest(self) -> Self {
        Self {
            translation_x: 0.0,
            translation_y: 0.0,
            rotation_z: 0.0,
            ..self
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.translation_x == 0.0 && self.translation_y == 0.0 && self.rotation_z == 0.0
    }
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
            rotation_z: 0.0,
            transform_origin: TransformOrigin::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(4.0, 30.0);
        assert_eq!(a - b, Point::new(6.0, -10.0));
        assert_eq!(a + b, Point::new(14.0, 50.0));
    }

    #[test]
    fn at_rest_keeps_alpha_and_origin() {
        let layer = GraphicsLayer {
            alpha: 0.4,
            translation_x: 3.0,
            translation_y: -8.0,
            rotation_z: 2.5,
            transform_origin: TransformOrigin::TOP_CENTER,
        };
        let rest = layer.at_rest();
        assert!(rest.is_at_rest());
        assert_eq!(rest.alpha, 0.4);
        assert_eq!(rest.transform_origin, TransformOrigin::TOP_CENTER);
    }

    #[test]
    fn default_origin_is_not_top_edge() {
        assert!(!TransformOrigin::default().is_on_top_edge());
        assert!(TransformOrigin::TOP_CENTER.is_on_top_edge());
    }
}
