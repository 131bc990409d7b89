//! Software presentation surface
//!
//! A ring of CPU framebuffers standing in for a windowed buffer strategy.
//! `present` copies the back buffer to a shared front buffer, which other
//! threads can read through a `FrontBuffer` handle while the loop runs.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::framebuffer::Framebuffer;
use crate::platform::{Canvas, Surface};

/// Read handle on the most recently presented frame
#[derive(Debug, Clone)]
pub struct FrontBuffer {
    frame: Arc<Mutex<Framebuffer>>,
    presented: Arc<AtomicU64>,
}

impl FrontBuffer {
    /// Number of frames presented so far
    pub fn presented(&self) -> u64 {
        self.presented.load(Ordering::Acquire)
    }

    /// Copy of the last presented frame
    pub fn snapshot(&self) -> Framebuffer {
        self.frame.lock().clone()
    }

    /// Inspect the last presented frame without copying it
    pub fn with_frame<R>(&self, f: impl FnOnce(&Framebuffer) -> R) -> R {
        f(&self.frame.lock())
    }
}

/// CPU surface with an N-buffer present cycle
#[derive(Debug)]
pub struct SoftwareSurface {
    width: u32,
    height: u32,
    buffers: Vec<Framebuffer>,
    back: usize,
    // Handed out while no buffer strategy exists, so early draws go nowhere
    scratch: Framebuffer,
    front: FrontBuffer,
}

impl SoftwareSurface {
    /// Surface of `width x height` pixels with no buffer strategy yet
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffers: Vec::new(),
            back: 0,
            scratch: Framebuffer::new(0, 0),
            front: FrontBuffer {
                frame: Arc::new(Mutex::new(Framebuffer::new(width, height))),
                presented: Arc::new(AtomicU64::new(0)),
            },
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of buffers in the present cycle (0 before creation)
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Shared handle on the presented frame
    pub fn front_buffer(&self) -> FrontBuffer {
        self.front.clone()
    }
}

impl Surface for SoftwareSurface {
    fn has_buffers(&self) -> bool {
        !self.buffers.is_empty()
    }

    fn create_buffers(&mut self, count: usize) {
        let count = count.max(1);
        log::debug!(
            "Creating {} software buffers ({}x{})",
            count,
            self.width,
            self.height
        );
        self.buffers = (0..count)
            .map(|_| Framebuffer::new(self.width, self.height))
            .collect();
        self.back = 0;
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        match self.buffers.get_mut(self.back) {
            Some(buffer) => buffer,
            None => &mut self.scratch,
        }
    }

    fn present(&mut self) {
        let Some(buffer) = self.buffers.get(self.back) else {
            log::warn!("present() called before buffers were created");
            return;
        };

        self.front.frame.lock().clone_from(buffer);
        self.front.presented.fetch_add(1, Ordering::AcqRel);
        self.back = (self.back + 1) % self.buffers.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Rgba;
    use glam::Vec2;

    #[test]
    fn test_starts_without_buffers() {
        let surface = SoftwareSurface::new(64, 48);
        assert!(!surface.has_buffers());
        assert_eq!(surface.buffer_count(), 0);
        assert_eq!(surface.front_buffer().presented(), 0);
    }

    #[test]
    fn test_draw_before_buffers_is_discarded() {
        let mut surface = SoftwareSurface::new(16, 16);
        surface.canvas().fill_rect(0, 0, 16, 16, Rgba::WHITE);
        surface.present();

        let front = surface.front_buffer();
        assert_eq!(front.presented(), 0);
        assert_eq!(front.snapshot().count(Rgba::WHITE), 0);
    }

    #[test]
    fn test_present_cycle() {
        let mut surface = SoftwareSurface::new(16, 16);
        surface.create_buffers(3);
        assert_eq!(surface.buffer_count(), 3);

        let front = surface.front_buffer();

        surface.canvas().fill_rect(0, 0, 16, 16, Rgba::BLACK);
        surface
            .canvas()
            .draw_line(Vec2::new(0.0, 0.0), Vec2::new(15.0, 0.0), Rgba::WHITE);
        surface.present();

        assert_eq!(front.presented(), 1);
        front.with_frame(|frame| {
            assert_eq!(frame.count(Rgba::WHITE), 16);
            assert_eq!(frame.count(Rgba::BLACK), 16 * 15);
        });

        // Next back buffer is a different (still cleared) buffer
        surface.present();
        assert_eq!(front.presented(), 2);
        assert_eq!(front.snapshot().count(Rgba::WHITE), 0);
    }
}
