use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::Vec2;

/// 4x4 float matrix in column-major layout.
///
/// Element `(row, col)` lives at `m[col * 4 + row]`, so the translation
/// column is `m[12..15]`. The layout matches WGSL `mat4x4<f32>` and is
/// uploaded to uniform buffers as-is.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Orthographic projection from canvas pixels to clip space.
    ///
    /// `(0, 0)` maps to the bottom-left corner and `(width, height)` to the
    /// top-right one. Depth collapses to `0`.
    pub fn orthographic(width: f32, height: f32) -> Self {
        let mut m = [0.0; 16];
        m[0] = 2.0 / width;
        m[5] = 2.0 / height;
        m[12] = -1.0;
        m[13] = -1.0;
        m[15] = 1.0;
        Self { m }
    }

    /// Translation by `(x, y)` in canvas pixels.
    pub fn translation(x: f32, y: f32) -> Self {
        let mut out = Self::IDENTITY;
        out.m[12] = x;
        out.m[13] = y;
        out
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[col * 4 + row]
    }

    /// Transforms `(p.x, p.y, 0, 1)` and returns the resulting `(x, y)`.
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let x = self.at(0, 0) * p.x + self.at(0, 1) * p.y + self.at(0, 3);
        let y = self.at(1, 0) * p.x + self.at(1, 1) * p.y + self.at(1, 3);
        Vec2::new(x, y)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut m = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                m[col * 4 + row] = (0..4).map(|k| self.at(row, k) * rhs.at(k, col)).sum();
            }
        }
        Mat4 { m }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(
            (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn orthographic_maps_canvas_corners_to_clip_corners() {
        let p = Mat4::orthographic(840.0, 360.0);
        assert_close(p.transform_point(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, -1.0));
        assert_close(p.transform_point(Vec2::new(840.0, 360.0)), Vec2::new(1.0, 1.0));
        assert_close(p.transform_point(Vec2::new(420.0, 180.0)), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn orthographic_is_column_major() {
        let p = Mat4::orthographic(840.0, 360.0);
        assert_eq!(p.m[0], 2.0 / 840.0);
        assert_eq!(p.m[5], 2.0 / 360.0);
        assert_eq!(p.m[12], -1.0);
        assert_eq!(p.m[13], -1.0);
        assert_eq!(p.m[15], 1.0);
        assert_eq!(p.m[10], 0.0);
    }

    #[test]
    fn translation_moves_points() {
        let t = Mat4::translation(100.0, 240.0);
        assert_eq!(t.transform_point(Vec2::new(5.0, 5.0)), Vec2::new(105.0, 245.0));
    }

    #[test]
    fn identity_is_neutral_for_mul() {
        let p = Mat4::orthographic(840.0, 360.0);
        assert_eq!(p * Mat4::IDENTITY, p);
        assert_eq!(Mat4::IDENTITY * p, p);
    }

    #[test]
    fn projection_times_model_applies_model_first() {
        let mvp = Mat4::orthographic(840.0, 360.0) * Mat4::translation(420.0, 180.0);
        assert_close(mvp.transform_point(Vec2::zero()), Vec2::new(0.0, 0.0));
    }
}
