//! Vertical flick-to-dismiss for draggable surfaces.
//!
//! A [`FlickGestureListener`] consumes the pointer events of one [`Surface`],
//! moves and rotates the surface while it is dragged vertically, and on
//! release either snaps it back or throws it out of the window. The host
//! learns about movement and dismissal through [`FlickCallbacks`].
//!
//! Animations are driven by the frame callbacks of a [`flick_core::Runtime`];
//! the host drains them once per display frame.

mod animator;
mod callbacks;
pub mod config;
mod content_size;
mod decision;
mod dim;
mod error;
mod interceptor;
mod layout;
mod listener;
mod session;
mod surface;

pub use animator::{throw_distance, DismissAnimator, LayerTransform};
pub use callbacks::{flick_callbacks, FlickCallbacks, LambdaCallbacks};
pub use config::{FlickConfig, DEFAULT_FLICK_THRESHOLD};
pub use content_size::{ContentSizeProvider, FixedContentSize, ScaledContentSize};
pub use decision::{decide, GestureOutcome, ReleaseSnapshot, ThrowDirection};
pub use dim::BackgroundDim;
pub use error::FlickConfigError;
pub use interceptor::{
    BoolInterceptor, GestureInterceptor, InterceptResult, NeverIntercept,
    PannableContentInterceptor,
};
pub use layout::FlickDismissLayout;
pub use listener::FlickGestureListener;
pub use session::{GestureSession, SessionState};
pub use surface::Surface;

pub use flick_foundation::{PointerEvent, PointerEventKind, ViewConfiguration};
pub use flick_ui_graphics::{GraphicsLayer, Point, Size, TransformOrigin};

pub mod prelude {
    pub use crate::{
        flick_callbacks, FlickCallbacks, FlickConfig, FlickDismissLayout, FlickGestureListener,
        GestureOutcome, PointerEvent, PointerEventKind, ScaledContentSize, Surface,
    };
}
