/// Surface module - swapchain presentation types and traits

// Module declarations
pub mod texture;
pub mod resource_factory;
pub mod drawable;
pub mod render_pass;
pub mod placeholder_texture;
pub mod surface_binding;
pub mod swapchain_framebuffer;

#[cfg(test)]
pub mod mock_surface;

#[cfg(test)]
mod render_pass_tests;

// Re-exports
pub use texture::*;
pub use resource_factory::*;
pub use drawable::*;
pub use render_pass::*;
pub use placeholder_texture::*;
pub use surface_binding::*;
pub use swapchain_framebuffer::*;
