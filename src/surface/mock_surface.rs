/// Mock surface collaborators for unit tests (no GPU required)
///
/// These mocks stand in for the platform presentation layer and the GPU
/// resource factory so the drawable-acquisition protocol and depth-buffer
/// lifecycle can be tested without a real backend.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::surface::{
    Drawable, PresentationLayer, ResourceFactory, Texture, TextureDesc, TextureFormat,
    TextureInfo, TextureUsage,
};

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
    pub name: String,
}

impl MockTexture {
    pub fn new(width: u32, height: u32, format: TextureFormat, name: String) -> Self {
        Self {
            info: TextureInfo {
                width,
                height,
                mip_levels: 1,
                array_layers: 1,
                format,
                usage: if format.is_depth() {
                    TextureUsage::DepthStencil
                } else {
                    TextureUsage::RenderTarget
                },
            },
            name,
        }
    }
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock Drawable
// ============================================================================

/// Drawable whose release (drop) is observable from the test
pub struct MockDrawable {
    texture: Arc<dyn Texture>,
    released: Arc<AtomicBool>,
}

impl MockDrawable {
    pub fn new(width: u32, height: u32, format: TextureFormat) -> Self {
        Self {
            texture: Arc::new(MockTexture::new(width, height, format, "drawable".to_string())),
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that flips to true when the drawable is dropped
    pub fn release_flag(&self) -> Arc<AtomicBool> {
        self.released.clone()
    }
}

impl Drawable for MockDrawable {
    fn texture(&self) -> Arc<dyn Texture> {
        self.texture.clone()
    }
}

impl Drop for MockDrawable {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

// ============================================================================
// Mock PresentationLayer
// ============================================================================

/// Scriptable presentation layer
///
/// Tests push `Some(drawable)` or `None` per frame through the shared
/// `pending` queue; an empty queue also yields no drawable.
pub struct MockPresentationLayer {
    /// Scripted acquisition results, shared with the test
    pub pending: Arc<Mutex<VecDeque<Option<Arc<dyn Drawable>>>>>,
    /// Number of next_drawable calls, shared with the test
    pub acquire_count: Arc<Mutex<u32>>,
}

impl MockPresentationLayer {
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(VecDeque::new())),
            acquire_count: Arc::new(Mutex::new(0)),
        }
    }
}

impl PresentationLayer for MockPresentationLayer {
    fn next_drawable(&mut self) -> Option<Arc<dyn Drawable>> {
        *self.acquire_count.lock().unwrap() += 1;
        self.pending.lock().unwrap().pop_front().flatten()
    }
}

// ============================================================================
// Mock ResourceFactory
// ============================================================================

/// Resource factory that records every allocation
pub struct MockResourceFactory {
    /// Descriptors of created textures, shared with the test
    pub created: Arc<Mutex<Vec<TextureDesc>>>,
    /// When true, the next create_texture call fails with OutOfMemory
    pub fail_next: Arc<Mutex<bool>>,
}

impl MockResourceFactory {
    pub fn new() -> Self {
        Self {
            created: Arc::new(Mutex::new(Vec::new())),
            fail_next: Arc::new(Mutex::new(false)),
        }
    }

    /// Get descriptors of created textures
    pub fn get_created(&self) -> Vec<TextureDesc> {
        self.created.lock().unwrap().clone()
    }
}

impl ResourceFactory for MockResourceFactory {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(Error::OutOfMemory);
        }
        self.created.lock().unwrap().push(desc);
        Ok(Arc::new(MockTexture::new(
            desc.width,
            desc.height,
            desc.format,
            format!("texture_{}", self.created.lock().unwrap().len()),
        )))
    }
}
