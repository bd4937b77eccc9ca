//! Rendering module
//!
//! The simulation produces a plain draw list (`draw`). The WebGPU pipeline
//! tessellates its rectangles into colored triangles; text is left to the
//! host overlay.

pub mod draw;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use draw::{Color, DrawCmd, build_frame, colors, text_commands};
pub use pipeline::RenderState;
pub use vertex::Vertex;
