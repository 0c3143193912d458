/// SurfaceBinding - mediates between the render loop and the platform
/// presentation layer

use std::sync::Arc;
use crate::aurora_warn;
use crate::surface::{Drawable, PresentationLayer};

/// Binding to the platform presentation layer
///
/// Owns the handle to the presentation layer, requests the next presentable
/// image each frame, and tracks whether the surface is currently
/// renderable. Holds at most one drawable at a time; the previous hold is
/// always dropped before the next acquisition.
pub struct SurfaceBinding {
    /// Platform presentation layer
    layer: Box<dyn PresentationLayer>,
    /// Single-slot hold on the current drawable (None = non-renderable)
    current: Option<Arc<dyn Drawable>>,
}

impl SurfaceBinding {
    /// Create a binding over a presentation layer
    ///
    /// The binding starts non-renderable; call
    /// [`acquire_next_drawable`](Self::acquire_next_drawable) at the start
    /// of each frame.
    pub fn new(layer: Box<dyn PresentationLayer>) -> Self {
        Self {
            layer,
            current: None,
        }
    }

    /// Request the next drawable from the presentation layer
    ///
    /// Any previously held drawable is released first, so at most one
    /// reference is outstanding at any instant. A null result from the
    /// platform is not an error: it leaves the binding non-renderable and
    /// logs a warning, and the caller skips rendering for this frame.
    pub fn acquire_next_drawable(&mut self) {
        // Release the prior hold before asking for the next image
        self.current = None;

        match self.layer.next_drawable() {
            Some(drawable) => {
                self.current = Some(drawable);
            }
            None => {
                aurora_warn!(
                    "aurora::SurfaceBinding",
                    "presentation layer returned no drawable, skipping frame"
                );
            }
        }
    }

    /// True iff the currently held drawable is valid
    ///
    /// The render loop gates on this before attempting to draw.
    pub fn is_renderable(&self) -> bool {
        self.current.is_some()
    }

    /// Get the currently held drawable
    ///
    /// Returns `None` when the last acquisition failed; callers must check
    /// [`is_renderable`](Self::is_renderable) first.
    pub fn current_drawable(&self) -> Option<&Arc<dyn Drawable>> {
        self.current.as_ref()
    }
}
