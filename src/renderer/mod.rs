//! Software rendering module
//!
//! Rasterizes lines and rectangles into CPU framebuffers and presents them
//! through a buffered `Surface`.

pub mod framebuffer;
pub mod shapes;
pub mod software;

pub use framebuffer::Framebuffer;
pub use software::{FrontBuffer, SoftwareSurface};
