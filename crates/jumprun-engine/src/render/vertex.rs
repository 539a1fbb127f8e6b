use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;
use crate::paint::Color;

/// Interleaved vertex: 3D position followed by RGBA color.
///
/// 7 floats per vertex (stride 28 bytes); position at offset 0, color at 12.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl ColorVertex {
    pub const STRIDE: u64 = std::mem::size_of::<ColorVertex>() as u64;
    pub const POSITION_OFFSET: u64 = 0;
    pub const COLOR_OFFSET: u64 = 3 * 4;

    /// A rectangle as 4 vertices in triangle-strip order at `z = 0`.
    pub fn quad(rect: Rect, color: Color) -> [ColorVertex; 4] {
        let color = color.to_array();
        rect.strip_corners().map(|c| ColorVertex {
            position: [c.x, c.y, 0.0],
            color,
        })
    }

    /// Attribute descriptors for the reflected shader locations.
    pub(crate) fn attributes(position_location: u32, color_location: u32) -> [wgpu::VertexAttribute; 2] {
        [
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: Self::POSITION_OFFSET,
                shader_location: position_location,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: Self::COLOR_OFFSET,
                shader_location: color_location,
            },
        ]
    }

    pub(crate) fn layout(attributes: &[wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_seven_packed_floats() {
        assert_eq!(ColorVertex::STRIDE, 28);
        let v = ColorVertex {
            position: [1.0, 2.0, 3.0],
            color: [4.0, 5.0, 6.0, 7.0],
        };
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(floats[(ColorVertex::COLOR_OFFSET / 4) as usize], 4.0);
    }

    #[test]
    fn quad_follows_strip_order() {
        let q = ColorVertex::quad(Rect::new(200.0, 250.0, 30.0, 30.0), Color::WHITE);
        let positions: Vec<[f32; 3]> = q.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                [230.0, 280.0, 0.0],
                [230.0, 250.0, 0.0],
                [200.0, 280.0, 0.0],
                [200.0, 250.0, 0.0],
            ]
        );
        assert!(q.iter().all(|v| v.color == [1.0; 4]));
    }
}
