//! Presentation collaborators
//!
//! A `Surface` is a buffered drawable the render loop paints once per pass:
//! acquire the back buffer's `Canvas`, draw, release it, then `present`.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color, laid out as it sits in a framebuffer
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Rgba = Rgba::rgb(192, 192, 192);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Drawing context for one buffer
pub trait Canvas {
    /// Fill an axis-aligned rectangle, clipped to the buffer
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba);

    /// Draw a one pixel wide line, clipped to the buffer
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgba);
}

/// Buffered drawable surface
pub trait Surface: Send {
    /// Whether a buffer strategy exists yet
    fn has_buffers(&self) -> bool;

    /// Allocate a buffer strategy with `count` buffers
    fn create_buffers(&mut self, count: usize);

    /// Drawing context for the current back buffer
    ///
    /// Only meaningful once `has_buffers` is true.
    fn canvas(&mut self) -> &mut dyn Canvas;

    /// Make the back buffer visible and advance to the next one
    fn present(&mut self);
}

/// Receives the once-a-second status line (a window title, a log line)
pub trait StatusSink: Send {
    fn set_status(&mut self, status: &str);
}

/// Writes status lines to the log
#[derive(Debug, Default)]
pub struct LogStatus;

impl StatusSink for LogStatus {
    fn set_status(&mut self, status: &str) {
        log::info!("{}", status);
    }
}
