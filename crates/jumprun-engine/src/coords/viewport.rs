/// Drawable size in physical pixels.
///
/// Independent of the canvas: the projection maps the fixed canvas onto
/// whatever the viewport currently is, so resizing stretches the level.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False while minimized (zero area).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width >= 1.0 && self.height >= 1.0
    }
}
