//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned filled rectangle (two triangles)
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let br = top_left + size;

    vec![
        Vertex::new(top_left.x, top_left.y, color),
        Vertex::new(br.x, top_left.y, color),
        Vertex::new(top_left.x, br.y, color),
        Vertex::new(top_left.x, br.y, color),
        Vertex::new(br.x, top_left.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 4.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 2.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 6.0);
    }
}
