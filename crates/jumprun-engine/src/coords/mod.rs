//! Coordinate and geometry types shared by the renderer and game logic.
//!
//! Canonical CPU space:
//! - Canvas pixels
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! The vertex shader maps canvas pixels to clip space with a fixed
//! orthographic [`Mat4`].

mod mat4;
mod rect;
mod vec2;
mod viewport;

pub use mat4::Mat4;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
