//! Vertex types for 2D rendering
//!
//! Arena space is top-left origin, y down. Vertices are uploaded in
//! normalized device coordinates (center origin, y up).

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::draw::Color;

/// Colored 2D vertex in NDC
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Map an arena-space point onto NDC, stretching the arena to the viewport
    pub fn from_arena(point: Vec2, arena: Vec2, color: Color) -> Self {
        let ndc = point / arena * 2.0 - Vec2::ONE;
        Self::new(ndc.x, -ndc.y, color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
