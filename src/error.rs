//! Error types for the Aurora surface layer
//!
//! This module defines the error types surfaced by swapchain framebuffer
//! construction and resizing. Transient presentation failures (a null
//! drawable) are deliberately NOT errors; they are reported through the
//! renderability state instead.

use std::fmt;

/// Result type for surface operations
pub type Result<T> = std::result::Result<T, Error>;

/// Aurora surface errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (Vulkan, Metal, etc.)
    BackendError(String),

    /// Out of GPU memory (e.g., depth texture allocation failed)
    OutOfMemory,

    /// Invalid resource description (e.g., a color format passed as depth)
    InvalidResource(String),

    /// Initialization failed (swapchain framebuffer construction)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
