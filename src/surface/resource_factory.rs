/// ResourceFactory trait - GPU texture allocation seam

use std::sync::Arc;
use crate::error::Result;
use crate::surface::{Texture, TextureDesc};

/// GPU resource factory trait
///
/// The narrow seam through which the swapchain framebuffer allocates its
/// owned depth texture. Implemented by backend-specific device wrappers
/// (e.g., a Vulkan or Metal device); the surface layer never creates any
/// other resource kind through it.
pub trait ResourceFactory: Send + Sync {
    /// Create a texture
    ///
    /// # Arguments
    ///
    /// * `desc` - Texture descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created texture
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfMemory` or `Error::BackendError` when the
    /// allocation fails. The surface layer propagates these unchanged to
    /// the caller of construction or resize.
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;
}
