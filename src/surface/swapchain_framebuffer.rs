/// SwapchainFramebuffer - the logical color/depth framebuffer bound to a
/// platform presentation layer

use std::sync::{Arc, Mutex};
use winit::window::Window;

use crate::error::{Error, Result};
use crate::surface::{
    Drawable, LoadAction, OutputAttachmentDescription, OutputDescription, PlaceholderTexture,
    PresentationLayer, RenderPassDescriptor, ResourceFactory, SurfaceBinding, Texture,
    TextureDesc, TextureFormat,
};

/// Configuration for creating a swapchain framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapchainDesc {
    /// Initial logical width in pixels
    pub width: u32,
    /// Initial logical height in pixels
    pub height: u32,
    /// Color attachment format
    pub color_format: TextureFormat,
    /// Optional depth attachment format; None disables the depth buffer
    pub depth_format: Option<TextureFormat>,
}

impl SwapchainDesc {
    /// Build a descriptor sized to a window's current inner size
    ///
    /// # Arguments
    ///
    /// * `window` - Window the surface presents to
    /// * `color_format` - Color attachment format
    /// * `depth_format` - Optional depth attachment format
    pub fn for_window(
        window: &Window,
        color_format: TextureFormat,
        depth_format: Option<TextureFormat>,
    ) -> Self {
        let size = window.inner_size();
        Self {
            width: size.width,
            height: size.height,
            color_format,
            depth_format,
        }
    }
}

impl Default for SwapchainDesc {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            color_format: TextureFormat::B8G8R8A8_UNORM,
            depth_format: None,
        }
    }
}

/// A concrete attachment of the framebuffer
#[derive(Clone)]
pub struct FramebufferAttachment {
    /// Texture backing the attachment
    pub texture: Arc<dyn Texture>,
    /// Array layer the attachment targets
    pub array_layer: u32,
}

/// Swapchain framebuffer
///
/// Composes the color attachment from the currently acquired drawable and
/// the depth attachment from its owned depth texture, exposes the logical
/// surface size, and builds a fresh render-pass descriptor each frame.
///
/// Per-frame protocol: [`acquire_next_drawable`](Self::acquire_next_drawable),
/// gate on [`is_renderable`](Self::is_renderable), then
/// [`create_render_pass_descriptor`](Self::create_render_pass_descriptor).
/// All calls happen on the render thread at frame boundaries; resize must
/// be serialized against in-flight rendering by the caller.
pub struct SwapchainFramebuffer {
    /// GPU factory used to (re)allocate the depth texture
    factory: Arc<Mutex<dyn ResourceFactory>>,
    /// Binding to the platform presentation layer
    binding: SurfaceBinding,
    /// Logical dimensions, valid even with no drawable held
    placeholder: PlaceholderTexture,
    /// Attachment formats, fixed at construction
    output_description: OutputDescription,
    /// Owned depth texture, replaced wholesale on every resize. The
    /// configured format lives in `output_description`, so a failed
    /// reallocation only empties this slot until the next resize.
    depth_texture: Option<Arc<dyn Texture>>,
}

impl SwapchainFramebuffer {
    /// Create a swapchain framebuffer
    ///
    /// Builds the fixed output description, allocates the initial depth
    /// texture when `desc.depth_format` is set, and records the logical
    /// dimensions.
    ///
    /// # Arguments
    ///
    /// * `factory` - GPU resource factory for depth texture allocation
    /// * `layer` - Platform presentation layer to acquire drawables from
    /// * `desc` - Initial size and attachment formats
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` when `desc.color_format` is a depth
    /// format or `desc.depth_format` is not one, and propagates factory
    /// errors from the initial depth allocation.
    pub fn new(
        factory: Arc<Mutex<dyn ResourceFactory>>,
        layer: Box<dyn PresentationLayer>,
        desc: SwapchainDesc,
    ) -> Result<Self> {
        if desc.color_format.is_depth() {
            return Err(Error::InvalidResource(format!(
                "{:?} is not a color format",
                desc.color_format
            )));
        }

        let mut depth_attachment = None;
        let depth_texture = match desc.depth_format {
            Some(format) => {
                if !format.is_depth() {
                    return Err(Error::InvalidResource(format!(
                        "{:?} is not a depth format",
                        format
                    )));
                }
                depth_attachment = Some(OutputAttachmentDescription::new(format));
                Some(Self::allocate_depth_texture(
                    &factory,
                    desc.width,
                    desc.height,
                    format,
                )?)
            }
            None => None,
        };

        let output_description = OutputDescription::new(
            depth_attachment,
            OutputAttachmentDescription::new(desc.color_format),
        );

        Ok(Self {
            factory,
            binding: SurfaceBinding::new(layer),
            placeholder: PlaceholderTexture::new(desc.width, desc.height),
            output_description,
            depth_texture,
        })
    }

    fn allocate_depth_texture(
        factory: &Arc<Mutex<dyn ResourceFactory>>,
        width: u32,
        height: u32,
        format: TextureFormat,
    ) -> Result<Arc<dyn Texture>> {
        factory
            .lock()
            .map_err(|_| Error::BackendError("resource factory lock poisoned".to_string()))?
            .create_texture(TextureDesc::depth_stencil(width, height, format))
    }

    /// Update the logical dimensions and recreate the depth texture
    ///
    /// The old depth texture is destroyed and a new one allocated at the
    /// new size; the texture is never resized in place. Reallocation
    /// happens even when the dimensions are unchanged, so callers should
    /// only invoke this on actual size changes, never per-frame.
    ///
    /// # Errors
    ///
    /// Propagates factory errors. The configured depth format is part of
    /// the output description and survives a failed reallocation, so a
    /// later successful resize allocates a fresh depth texture.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.placeholder.resize(width, height);

        if let Some(depth) = self.output_description.depth_attachment {
            // Destroy the old texture before allocating its replacement
            self.depth_texture = None;
            self.depth_texture = Some(Self::allocate_depth_texture(
                &self.factory,
                width,
                height,
                depth.format,
            )?);
        }
        Ok(())
    }

    /// Logical width in pixels, valid with no drawable acquired
    pub fn width(&self) -> u32 {
        self.placeholder.width()
    }

    /// Logical height in pixels, valid with no drawable acquired
    pub fn height(&self) -> u32 {
        self.placeholder.height()
    }

    /// Attachment formats of this framebuffer
    pub fn output_description(&self) -> &OutputDescription {
        &self.output_description
    }

    /// The owned depth texture as a framebuffer attachment, if configured
    pub fn depth_target(&self) -> Option<FramebufferAttachment> {
        self.depth_texture.as_ref().map(|texture| FramebufferAttachment {
            texture: texture.clone(),
            array_layer: 0,
        })
    }

    /// Request the next drawable from the presentation layer
    ///
    /// Delegates to the surface binding; see
    /// [`SurfaceBinding::acquire_next_drawable`].
    pub fn acquire_next_drawable(&mut self) {
        self.binding.acquire_next_drawable();
    }

    /// True iff the associated drawable is valid
    ///
    /// Callers interact with the framebuffer as the unit of "can I draw
    /// now", so the binding's gate is re-exposed here.
    pub fn is_renderable(&self) -> bool {
        self.binding.is_renderable()
    }

    /// Get the currently held drawable
    pub fn current_drawable(&self) -> Option<&Arc<dyn Drawable>> {
        self.binding.current_drawable()
    }

    /// Build a render-pass descriptor for the current drawable
    ///
    /// Color slot 0 references the drawable's texture view and the depth
    /// slot references the owned depth texture (when configured), both with
    /// [`LoadAction::Load`]: this layer does not own clearing policy. A
    /// fresh descriptor is built on every call; nothing is cached.
    ///
    /// # Panics
    ///
    /// Panics if no renderable drawable is held. This is a programmer
    /// error: gate on [`is_renderable`](Self::is_renderable) after every
    /// acquisition.
    pub fn create_render_pass_descriptor(&self) -> RenderPassDescriptor {
        let drawable = self
            .binding
            .current_drawable()
            .expect("create_render_pass_descriptor called without a renderable drawable");

        let mut descriptor = RenderPassDescriptor::new();
        descriptor.set_color_attachment(0, drawable.texture(), LoadAction::Load);

        if let Some(texture) = &self.depth_texture {
            descriptor.set_depth_attachment(texture.clone(), LoadAction::Load);
        }

        descriptor
    }

    /// Release the owned depth texture
    ///
    /// Idempotent; safe to call when no depth texture exists. The
    /// framebuffer must not be used after disposal.
    pub fn dispose(&mut self) {
        self.depth_texture = None;
    }
}
