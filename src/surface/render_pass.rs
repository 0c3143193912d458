/// Render-pass descriptor builder and output description

use std::sync::Arc;
use crate::surface::{Texture, TextureFormat};

/// Load action for an attachment
///
/// Per-attachment policy for handling existing contents at the start of a
/// render pass. The surface layer only ever sets `Load`: clearing policy
/// belongs to the renderer, not the swapchain framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadAction {
    /// Preserve existing content
    Load,
    /// Clear the content
    Clear,
    /// Don't care about existing content
    DontCare,
}

/// A texture slot inside a render-pass descriptor
#[derive(Clone)]
pub struct RenderPassAttachment {
    /// Texture view the pass writes to
    pub texture: Arc<dyn Texture>,
    /// What to do with the existing contents
    pub load_action: LoadAction,
}

/// Transient description of which textures a draw operation writes to
///
/// A mutable builder with indexable color-attachment slots and one depth
/// slot. Built fresh by
/// [`SwapchainFramebuffer::create_render_pass_descriptor`](crate::surface::SwapchainFramebuffer::create_render_pass_descriptor)
/// on every call; it has no identity beyond the call that produced it and
/// is never cached.
#[derive(Clone)]
pub struct RenderPassDescriptor {
    color_attachments: Vec<Option<RenderPassAttachment>>,
    depth_attachment: Option<RenderPassAttachment>,
}

impl RenderPassDescriptor {
    /// Number of indexable color-attachment slots
    pub const MAX_COLOR_ATTACHMENTS: usize = 8;

    /// Create an empty descriptor with all slots unset
    pub fn new() -> Self {
        Self {
            color_attachments: (0..Self::MAX_COLOR_ATTACHMENTS).map(|_| None).collect(),
            depth_attachment: None,
        }
    }

    /// Set a color attachment slot
    ///
    /// # Arguments
    ///
    /// * `index` - Slot index, must be < `MAX_COLOR_ATTACHMENTS`
    /// * `texture` - Texture view to write to
    /// * `load_action` - Existing-content policy for the slot
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_color_attachment(
        &mut self,
        index: usize,
        texture: Arc<dyn Texture>,
        load_action: LoadAction,
    ) {
        assert!(
            index < Self::MAX_COLOR_ATTACHMENTS,
            "color attachment index {} out of range",
            index
        );
        self.color_attachments[index] = Some(RenderPassAttachment {
            texture,
            load_action,
        });
    }

    /// Get a color attachment slot
    pub fn color_attachment(&self, index: usize) -> Option<&RenderPassAttachment> {
        self.color_attachments.get(index).and_then(|slot| slot.as_ref())
    }

    /// Number of color slots that are set
    pub fn color_attachment_count(&self) -> usize {
        self.color_attachments.iter().filter(|slot| slot.is_some()).count()
    }

    /// Set the depth attachment slot
    pub fn set_depth_attachment(&mut self, texture: Arc<dyn Texture>, load_action: LoadAction) {
        self.depth_attachment = Some(RenderPassAttachment {
            texture,
            load_action,
        });
    }

    /// Get the depth attachment slot
    pub fn depth_attachment(&self) -> Option<&RenderPassAttachment> {
        self.depth_attachment.as_ref()
    }
}

impl Default for RenderPassDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

// ===== OUTPUT DESCRIPTION =====

/// Format of a single output attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputAttachmentDescription {
    /// Pixel format of the attachment
    pub format: TextureFormat,
}

impl OutputAttachmentDescription {
    pub fn new(format: TextureFormat) -> Self {
        Self { format }
    }
}

/// Immutable description of the framebuffer's attachment formats
///
/// One color format and an optional depth format, fixed at construction.
/// Changing pixel formats is not supported; only dimensions change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputDescription {
    /// Depth attachment format, if a depth buffer is configured
    pub depth_attachment: Option<OutputAttachmentDescription>,
    /// Color attachment format
    pub color_attachment: OutputAttachmentDescription,
}

impl OutputDescription {
    pub fn new(
        depth_attachment: Option<OutputAttachmentDescription>,
        color_attachment: OutputAttachmentDescription,
    ) -> Self {
        Self {
            depth_attachment,
            color_attachment,
        }
    }
}
