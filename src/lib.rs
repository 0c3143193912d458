/*!
# Aurora Render Surface

Swapchain presentation surface layer for windowed rendering applications.

This crate tracks the logical color/depth framebuffer bound to a
platform-provided presentation layer: it acquires the next presentable
image ("drawable") each frame, owns the depth texture across resizes, and
builds the render-pass descriptor used to draw into the surface. The
surrounding graphics device is consumed through narrow trait seams
([`PresentationLayer`](surface::PresentationLayer),
[`ResourceFactory`](surface::ResourceFactory)) implemented by backends.

## Architecture

- **SurfaceBinding**: acquires/releases the per-frame drawable and tracks
  renderability
- **SwapchainFramebuffer**: owns the depth texture, exposes the logical
  size and output formats, and builds render-pass descriptors
- **PresentationLayer / ResourceFactory**: backend seams (a platform
  presentation layer and a GPU texture factory)

## Frame protocol

```no_run
# use aurora_render_surface::aurora::surface::*;
# fn frame(framebuffer: &mut SwapchainFramebuffer) {
framebuffer.acquire_next_drawable();
if framebuffer.is_renderable() {
    let descriptor = framebuffer.create_render_pass_descriptor();
    // record and submit rendering against `descriptor`
} // else: skip this frame and retry next frame
# }
```
*/

// Internal modules
mod error;
pub mod log;
pub mod surface;


// Main aurora namespace module
pub mod aurora {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            DefaultLogger, LogEntry, LogSeverity, Logger, reset_logger, set_logger,
        };
    }

    // Surface sub-module with all presentation types
    pub mod surface {
        pub use crate::surface::*;
    }
}
