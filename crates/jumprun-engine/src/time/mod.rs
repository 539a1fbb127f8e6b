//! Frame timing.
//!
//! One `FrameClock` drives the window loop; `tick()` is called once per
//! presented frame. Movement itself is tick-based and does not read `dt`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
