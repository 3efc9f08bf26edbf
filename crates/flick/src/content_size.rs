/// Heights of the content shown inside a flickable surface.
///
/// The content can be larger or smaller than the surface (e.g. a zoomed
/// image), so dismiss thresholds and throw distances are measured against
/// it rather than against the surface.
pub trait ContentSizeProvider {
    /// Height of the content with its scale applied, used to throw the
    /// content fully out of the window on dismissal.
    fn height_for_dismiss_animation(&self) -> i32;

    /// Height used to judge whether the finger moved far enough to dismiss.
    ///
    /// `max_height` is the surface's own height; implementations may cap
    /// the returned value with it.
    fn height_for_calculating_dismiss_threshold(&self, max_height: i32) -> i32;
}

/// Content of a single, possibly zoomed, height.
///
/// The dismiss threshold uses only the part of the content that fits
/// inside the surface.
pub struct ScaledContentSize<F>
where
    F: Fn() -> i32,
{
    scaled_height: F,
}

impl<F> ScaledContentSize<F>
where
    F: Fn() -> i32,
{
    pub fn new(scaled_height: F) -> Self {
        Self { scaled_height }
    }
}

impl<F> ContentSizeProvider for ScaledContentSize<F>
where
    F: Fn() -> i32,
{
    fn height_for_dismiss_animation(&self) -> i32 {
        (self.scaled_height)()
    }

    fn height_for_calculating_dismiss_threshold(&self, max_height: i32) -> i32 {
        (self.scaled_height)().min(max_height)
    }
}

/// Content with fixed, independently chosen heights.
///
/// Useful while content is still loading: a positive threshold height keeps
/// the surface dismissable behind a progress indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedContentSize {
    pub dismiss_animation_height: i32,
    pub dismiss_threshold_height: i32,
}

impl FixedContentSize {
    pub fn new(dismiss_animation_height: i32, dismiss_threshold_height: i32) -> Self {
        Self {
            dismiss_animation_height,
            dismiss_threshold_height,
        }
    }

    pub fn uniform(height: i32) -> Self {
        Self::new(height, height)
    }
}

impl ContentSizeProvider for FixedContentSize {
    fn height_for_dismiss_animation(&self) -> i32 {
        self.dismiss_animation_height
    }

    fn height_for_calculating_dismiss_threshold(&self, _max_height: i32) -> i32 {
        self.dismiss_threshold_height
    }
}
