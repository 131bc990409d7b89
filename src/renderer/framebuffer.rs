//! CPU framebuffer

use glam::Vec2;

use super::shapes::{clip_line, for_each_line_pixel};
use crate::platform::{Canvas, Rgba};

/// Row-major RGBA pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    /// Buffer of `width x height` pixels, cleared to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Raw bytes (RGBA8, row-major), ready for upload or encoding
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel; out-of-range coordinates are ignored
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Number of pixels holding exactly `color`
    pub fn count(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl Canvas for Framebuffer {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(self.width as i64);
        let y1 = (y as i64 + height as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize;
        for row in y0 as usize..y1 as usize {
            let start = row * stride;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(color);
        }
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let max = Vec2::new((self.width - 1) as f32, (self.height - 1) as f32);
        let Some((a, b)) = clip_line(from, to, max) else {
            return;
        };

        // Clipped endpoints can land a hair inside an edge; snap to the nearest pixel
        let (a, b) = (a.round(), b.round());
        for_each_line_pixel(a.x as i32, a.y as i32, b.x as i32, b.y as i32, |x, y| {
            self.set_pixel(x, y, color)
        });
    }
}
