/// PlaceholderTexture - logical surface dimensions without a backing image

/// Stand-in for the drawable-backed color target
///
/// Holds only the logical surface size, so width/height stay queryable
/// before any drawable has been acquired and between frames. Mutated only
/// by the resize operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderTexture {
    width: u32,
    height: u32,
}

impl PlaceholderTexture {
    /// Create a placeholder at the given logical size
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Update the logical size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Logical width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }
}
