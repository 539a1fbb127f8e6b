//! Jump 'n run engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the game layer: the window
//! loop, device/surface, polled input, frame timing, logging, coordinates and
//! the shader program + quad rendering path.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
