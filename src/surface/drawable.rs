/// Drawable and PresentationLayer traits - the platform presentation seam

use std::sync::Arc;
use crate::surface::Texture;

/// A platform-supplied presentable image for one frame
///
/// Retrieved from a [`PresentationLayer`] and eventually shown on screen.
/// The platform owns the image; the surface layer holds at most one
/// `Arc<dyn Drawable>` at a time and holds it for at most one frame.
/// Dropping the handle is the release.
pub trait Drawable: Send + Sync {
    /// Get the texture view backing this drawable
    ///
    /// This is the view the render-pass descriptor's color attachment
    /// references.
    fn texture(&self) -> Arc<dyn Texture>;
}

/// Platform presentation layer trait
///
/// Hands out the next presentable image each frame. Implemented by
/// backend-specific presentation wrappers (a CAMetalLayer, a Vulkan
/// swapchain, ...).
pub trait PresentationLayer: Send + Sync {
    /// Request the next available drawable
    ///
    /// # Returns
    ///
    /// `Some(drawable)` when an image is available, `None` when the surface
    /// is temporarily unable to provide one (e.g., an out-of-band resize
    /// race or a backgrounded window). `None` is not an error: the caller
    /// records a non-renderable state and retries next frame.
    fn next_drawable(&mut self) -> Option<Arc<dyn Drawable>>;
}
