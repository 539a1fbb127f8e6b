//! Shader program construction.
//!
//! [`build_program`] drives any [`ShaderBackend`] through the classic
//! compile → link → validate sequence and guarantees that every handle
//! created along the way is deleted when a step fails.
//!
//! [`GpuShaderBackend`] is the wgpu implementation: WGSL is compiled and
//! validated with naga, attribute/uniform locations are reflected from the
//! IR, and the validated program is turned into a render pipeline.

mod backend;
mod build;
mod error;
mod gpu;
mod reflect;
mod sources;

pub use backend::{ShaderBackend, ShaderStage};
pub use build::build_program;
pub use error::{ProgramError, ProgramStep};
pub use gpu::{GpuShaderBackend, ProgramId, ProgramPipeline, ShaderId};
pub use reflect::{ProgramInterface, UniformSlot, VertexAttribute};
pub use sources::ShaderSources;
