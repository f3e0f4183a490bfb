//! Debug rendering hook
//!
//! Boxes can paint themselves onto any [`Canvas`]. This is a debugging aid
//! only; nothing in the simulation reads back what was drawn.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::Aabb;

/// Drawing surface that can fill rectangles
pub trait Canvas {
    fn fill_rect(&mut self, x: f64, y: f64, width: i32, height: i32, color: [f32; 4]);
}

/// Canvas that tessellates fills into a triangle list
#[derive(Debug, Clone, Default)]
pub struct VertexCanvas {
    pub vertices: Vec<Vertex>,
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Raw bytes ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Canvas for VertexCanvas {
    fn fill_rect(&mut self, x: f64, y: f64, width: i32, height: i32, color: [f32; 4]) {
        self.vertices.extend(shapes::rect(
            Vec2::new(x as f32, y as f32),
            Vec2::new(width as f32, height as f32),
            color,
        ));
    }
}

impl Aabb {
    /// Fill the area covered by the box with the debug color
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.draw_with(canvas, colors::DEBUG_AABB);
    }

    /// Fill the area covered by the box with `color`
    pub fn draw_with<C: Canvas + ?Sized>(&self, canvas: &mut C, color: [f32; 4]) {
        let tl = self.top_left();
        canvas.fill_rect(tl.x, tl.y, self.width(), self.height(), color);
    }
}
