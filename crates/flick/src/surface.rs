use std::cell::Cell;

use flick_ui_graphics::{GraphicsLayer, Size};

/// The draggable surface a recognizer moves around.
///
/// Shared between the host, which renders [`Surface::layer`], and the
/// recognizer and its animator, which mutate the layer while a gesture or
/// transition is in flight.
#[derive(Debug)]
pub struct Surface {
    size: Size,
    window_height: f32,
    layer: Cell<GraphicsLayer>,
    disallow_parent_intercept: Cell<bool>,
}

impl Surface {
    /// A surface filling a window of the same size.
    pub fn new(size: Size) -> Self {
        Self::with_window_height(size, size.height)
    }

    pub fn with_window_height(size: Size, window_height: f32) -> Self {
        Self {
            size,
            window_height,
            layer: Cell::new(GraphicsLayer::default()),
            disallow_parent_intercept: Cell::new(false),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Height of the host window the surface lives in.
    pub fn window_height(&self) -> f32 {
        self.window_height
    }

    pub fn layer(&self) -> GraphicsLayer {
        self.layer.get()
    }

    pub fn set_layer(&self, layer: GraphicsLayer) {
        self.layer.set(layer);
    }

    pub fn update_layer(&self, update: impl FnOnce(&mut GraphicsLayer)) {
        let mut layer = self.layer.get();
        update(&mut layer);
        self.layer.set(layer);
    }

    /// Asks ancestors not to steal the rest of the pointer stream.
    pub fn request_disallow_intercept(&self, disallow: bool) {
        self.disallow_parent_intercept.set(disallow);
    }

    pub fn parent_intercept_disallowed(&self) -> bool {
        self.disallow_parent_intercept.get()
    }

    /// Vertical translation relative to the surface height. Zero for
    /// surfaces that have not been laid out yet.
    pub fn move_ratio(&self) -> f32 {
        let height = self.height();
        if height > 0.0 {
            self.layer.get().translation_y / height
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_ratio_follows_translation() {
        let surface = Surface::new(Size::new(500.0, 1000.0));
        surface.update_layer(|layer| layer.translation_y = -250.0);
        assert_eq!(surface.move_ratio(), -0.25);
        assert_eq!(surface.window_height(), 1000.0);
    }

    #[test]
    fn unmeasured_surface_has_zero_ratio() {
        let surface = Surface::new(Size::ZERO);
        surface.update_layer(|layer| layer.translation_y = 40.0);
        assert_eq!(surface.move_ratio(), 0.0);
    }
}
