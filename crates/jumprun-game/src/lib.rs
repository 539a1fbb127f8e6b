//! Jump 'n run game layer.
//!
//! Everything here is plain CPU state: the player, its jump-phase state
//! machine, the static level and the key mapping. The demo binary feeds it a
//! [`Controls`] snapshot once per frame and draws the result.

pub mod controls;
pub mod level;
pub mod physics;
pub mod tuning;

pub use controls::Controls;
pub use level::LevelGeometry;
pub use physics::{InputFlags, JumpPhase, PlayerState, WallSide};
pub use tuning::{MovementMode, Tuning};
