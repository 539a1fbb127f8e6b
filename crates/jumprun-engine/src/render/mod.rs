//! GPU rendering subsystem.
//!
//! Convention:
//! - CPU geometry is in canvas pixels (bottom-left origin, +Y up).
//! - The vertex shader applies `projection * model` uniforms.

mod ctx;
pub mod program;
pub mod shapes;
mod vertex;

pub use ctx::{RenderCtx, RenderTarget};
pub use vertex::ColorVertex;

/// Minimum binding size of a `mat4x4<f32>` uniform.
pub(crate) const MAT4_BINDING_SIZE: std::num::NonZeroU64 =
    match std::num::NonZeroU64::new(std::mem::size_of::<crate::coords::Mat4>() as u64) {
        Some(size) => size,
        None => panic!("Mat4 must not be zero-sized"),
    };
