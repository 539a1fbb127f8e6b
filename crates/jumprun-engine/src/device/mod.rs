//! GPU device + surface management.
//!
//! [`Gpu`] owns the wgpu device and queue for the game window, keeps the
//! surface configured across resizes and hands out one [`GpuFrame`] per
//! presented frame.

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
