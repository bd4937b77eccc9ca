//! Shape generation for 2D primitives

use glam::Vec2;

use super::draw::{Color, DrawCmd};
use super::vertex::Vertex;

/// Two triangles covering an arena-space rectangle
pub fn rect(pos: Vec2, size: Vec2, color: Color, arena: Vec2) -> [Vertex; 6] {
    let tl = Vertex::from_arena(pos, arena, color);
    let tr = Vertex::from_arena(pos + Vec2::new(size.x, 0.0), arena, color);
    let bl = Vertex::from_arena(pos + Vec2::new(0.0, size.y), arena, color);
    let br = Vertex::from_arena(pos + size, arena, color);
    [tl, bl, tr, tr, bl, br]
}

/// Tessellate every rectangle in a frame, preserving draw order
///
/// Text commands are skipped; glyphs belong to the overlay.
pub fn frame_vertices(cmds: &[DrawCmd], arena: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(cmds.len() * 6);
    for cmd in cmds {
        if let DrawCmd::Rect { pos, size, color } = cmd {
            // Zero-area rects (empty health bars) add nothing
            if size.x <= 0.0 || size.y <= 0.0 {
                continue;
            }
            vertices.extend_from_slice(&rect(*pos, *size, *color, arena));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_rect_covers_corners() {
        let arena = Vec2::new(100.0, 100.0);
        let verts = rect(Vec2::ZERO, Vec2::splat(50.0), RED, arena);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == -1.0 || x == 0.0));
        assert!(ys.iter().all(|&y| y == 1.0 || y == 0.0));
        assert!(verts.iter().all(|v| v.color == RED));
    }

    #[test]
    fn test_frame_vertices_skips_text_and_empty() {
        let arena = Vec2::new(100.0, 100.0);
        let cmds = vec![
            DrawCmd::rect(Vec2::ZERO, Vec2::splat(10.0), RED),
            DrawCmd::text("hi", Vec2::ZERO, 12.0, RED),
            DrawCmd::rect(Vec2::ZERO, Vec2::new(0.0, 5.0), RED),
            DrawCmd::rect(Vec2::splat(20.0), Vec2::splat(10.0), RED),
        ];
        assert_eq!(frame_vertices(&cmds, arena).len(), 12);
    }
}
