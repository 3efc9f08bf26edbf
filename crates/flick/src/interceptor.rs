/// Answer of a [`GestureInterceptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterceptResult {
    /// Someone else owns this drag; the recognizer stays out of it until the
    /// next pointer-down.
    Intercepted,
    Ignored,
}

/// Lets the host claim a drag before it is recognized as a flick, e.g.
/// while the content itself can still be panned.
///
/// Consulted at most once per gesture, before the drag is classified
/// vertical, with the vertical distance moved since pointer-down.
pub trait GestureInterceptor {
    fn should_intercept(&self, scroll_y: f32) -> InterceptResult;
}

impl<F> GestureInterceptor for F
where
    F: Fn(f32) -> InterceptResult,
{
    fn should_intercept(&self, scroll_y: f32) -> InterceptResult {
        self(scroll_y)
    }
}

/// Interceptor that never claims a gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverIntercept;

impl GestureInterceptor for NeverIntercept {
    fn should_intercept(&self, _scroll_y: f32) -> InterceptResult {
        InterceptResult::Ignored
    }
}

/// Adapter for predicates answering "should this drag be intercepted?".
pub struct BoolInterceptor<F>
where
    F: Fn(f32) -> bool,
{
    predicate: F,
}

impl<F> BoolInterceptor<F>
where
    F: Fn(f32) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> GestureInterceptor for BoolInterceptor<F>
where
    F: Fn(f32) -> bool,
{
    fn should_intercept(&self, scroll_y: f32) -> InterceptResult {
        if (self.predicate)(scroll_y) {
            InterceptResult::Intercepted
        } else {
            InterceptResult::Ignored
        }
    }
}

/// Intercepts while the wrapped content can still scroll in the direction
/// of the drag.
///
/// `can_scroll_vertically` receives `-1` for upward drags and `1` otherwise.
pub struct PannableContentInterceptor<F>
where
    F: Fn(i32) -> bool,
{
    can_scroll_vertically: F,
}

impl<F> PannableContentInterceptor<F>
where
    F: Fn(i32) -> bool,
{
    pub fn new(can_scroll_vertically: F) -> Self {
        Self {
            can_scroll_vertically,
        }
    }
}

impl<F> GestureInterceptor for PannableContentInterceptor<F>
where
    F: Fn(i32) -> bool,
{
    fn should_intercept(&self, scroll_y: f32) -> InterceptResult {
        let direction = if scroll_y < 0.0 { -1 } else { 1 };
        if (self.can_scroll_vertically)(direction) {
            InterceptResult::Intercepted
        } else {
            InterceptResult::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_interceptors() {
        let interceptor = |scroll_y: f32| {
            if scroll_y > 0.0 {
                InterceptResult::Intercepted
            } else {
                InterceptResult::Ignored
            }
        };
        assert_eq!(interceptor.should_intercept(3.0), InterceptResult::Intercepted);
        assert_eq!(interceptor.should_intercept(-3.0), InterceptResult::Ignored);
    }

    #[test]
    fn bool_predicates_are_adapted() {
        let interceptor = BoolInterceptor::new(|scroll_y| scroll_y.abs() > 10.0);
        assert_eq!(interceptor.should_intercept(11.0), InterceptResult::Intercepted);
        assert_eq!(interceptor.should_intercept(9.0), InterceptResult::Ignored);
        assert_eq!(NeverIntercept.should_intercept(1e6), InterceptResult::Ignored);
    }

    #[test]
    fn pannable_content_checks_drag_direction() {
        // Content already scrolled to its top edge: can only pan downwards.
        let interceptor = PannableContentInterceptor::new(|direction| direction > 0);
        assert_eq!(interceptor.should_intercept(12.0), InterceptResult::Intercepted);
        assert_eq!(interceptor.should_intercept(-12.0), InterceptResult::Ignored);
    }
}
