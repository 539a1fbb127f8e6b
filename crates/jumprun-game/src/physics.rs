//! Player movement and the jump-phase state machine.
//!
//! All speeds are per tick; [`PlayerState::update`] is called exactly once per
//! presented frame.

use std::fmt;

use crate::controls::Controls;
use crate::tuning::{MovementMode, Tuning};

/// Vertical state of the player.
///
/// `Grounded` covers both standing and falling: without an active rise the
/// player falls until it rests on the platform.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum JumpPhase {
    #[default]
    Grounded,
    /// Rising toward the primary arc height while jump is held.
    RisingPrimary,
    /// Rising toward the lower secondary arc height after an early release.
    RisingSecondary,
}

impl JumpPhase {
    #[inline]
    pub fn is_rising(self) -> bool {
        !matches!(self, JumpPhase::Grounded)
    }
}

impl fmt::Display for JumpPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpPhase::Grounded => f.write_str("grounded"),
            JumpPhase::RisingPrimary => f.write_str("rising (primary)"),
            JumpPhase::RisingSecondary => f.write_str("rising (secondary)"),
        }
    }
}

/// Corridor boundary the player is attached to in wall slide mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WallSide {
    Left,
    Right,
}

/// Movement input for one tick.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct InputFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump_held: bool,
    /// Jump went down this tick.
    pub jump_pressed: bool,
}

/// The player rectangle's position (bottom-left corner) and movement state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    /// Height the current or next jump is measured from.
    pub jump_ref: f32,
    pub jump_speed: f32,
    pub phase: JumpPhase,
    pub input: InputFlags,
    pub movement_mode: MovementMode,
    pub wall: Option<WallSide>,
}

impl PlayerState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.start_x,
            y: tuning.start_y,
            jump_ref: tuning.start_y,
            jump_speed: tuning.initial_jump_speed,
            phase: JumpPhase::Grounded,
            input: InputFlags::default(),
            movement_mode: tuning.movement_mode,
            wall: None,
        }
    }

    /// Puts the player back at the start position. Keeps the movement mode.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.x = tuning.start_x;
        self.y = tuning.start_y;
        self.jump_ref = tuning.start_y;
        self.jump_speed = tuning.initial_jump_speed;
        self.set_phase(JumpPhase::Grounded);
        self.wall = None;
        log::debug!("player reset to ({}, {})", self.x, self.y);
    }

    /// Stores this tick's movement input and runs reset / mode toggle requests.
    pub fn apply_controls(&mut self, controls: &Controls, tuning: &Tuning) {
        self.input = controls.flags;

        if controls.reset {
            self.reset(tuning);
        }

        if controls.toggle_wall_lock {
            self.movement_mode = self.movement_mode.toggled();
            if self.movement_mode == MovementMode::Free {
                self.wall = None;
            }
            log::info!("movement mode: {}", self.movement_mode);
        }
    }

    /// Advances one tick: jump start, horizontal movement, then vertical movement.
    pub fn update(&mut self, tuning: &Tuning) {
        self.try_start_jump(tuning);
        self.move_horizontally(tuning);
        self.move_vertically(tuning);
    }

    /// True while the player is above the platform top.
    #[inline]
    pub fn is_airborne(&self, tuning: &Tuning) -> bool {
        self.y > tuning.platform_height
    }

    /// Standing on the platform, or still at the jump reference it has not
    /// left yet (the start position).
    #[inline]
    pub fn is_resting(&self, tuning: &Tuning) -> bool {
        (self.y - self.jump_ref).abs() <= tuning.resting_tolerance
            || self.y <= tuning.platform_height + tuning.resting_tolerance
    }

    /// Touching either corridor boundary.
    pub fn is_flush(&self, tuning: &Tuning) -> bool {
        self.x <= tuning.corridor_start || self.x >= tuning.corridor_end()
    }

    fn set_phase(&mut self, phase: JumpPhase) {
        if self.phase != phase {
            log::debug!("jump phase {} -> {} at y={:.1}", self.phase, phase, self.y);
            self.phase = phase;
        }
    }

    fn try_start_jump(&mut self, tuning: &Tuning) {
        if !self.input.jump_pressed || self.phase.is_rising() {
            return;
        }

        let wall_jump = self.wall.is_some() || (self.is_airborne(tuning) && self.is_flush(tuning));
        if !wall_jump && !self.is_resting(tuning) {
            return;
        }

        if let Some(side) = self.wall.take() {
            log::debug!("wall jump off {side:?} wall");
        }
        self.jump_ref = self.y;
        self.jump_speed = tuning.initial_jump_speed;
        self.set_phase(JumpPhase::RisingPrimary);
    }

    fn move_horizontally(&mut self, tuning: &Tuning) {
        if self.wall.is_some() {
            return;
        }

        let mut dx = 0.0;
        if self.input.left {
            dx -= tuning.horizontal_speed;
        }
        if self.input.right {
            dx += tuning.horizontal_speed;
        }
        if dx == 0.0 {
            return;
        }

        let x = self.x + dx;
        let clamped = if x < tuning.corridor_start {
            self.x = tuning.corridor_start;
            Some(WallSide::Left)
        } else if x > tuning.corridor_end() {
            self.x = tuning.corridor_end();
            Some(WallSide::Right)
        } else {
            self.x = x;
            None
        };

        if let Some(side) = clamped {
            self.on_clamp(side, tuning);
        }
    }

    /// Boundary hit while falling: attach in wall slide mode, otherwise nudge up.
    fn on_clamp(&mut self, side: WallSide, tuning: &Tuning) {
        if !self.is_airborne(tuning) || self.phase.is_rising() {
            return;
        }

        match self.movement_mode {
            MovementMode::WallSlide => {
                self.wall = Some(side);
                log::debug!("attached to {side:?} wall at y={:.1}", self.y);
            }
            MovementMode::Free => {
                self.y = (self.y + tuning.wall_break).min(tuning.ceiling());
            }
        }
    }

    fn move_vertically(&mut self, tuning: &Tuning) {
        match self.phase {
            JumpPhase::RisingPrimary | JumpPhase::RisingSecondary => self.rise(tuning),
            JumpPhase::Grounded => {
                if self.wall.is_some() && self.input.down {
                    self.wall = None;
                }
                match self.wall {
                    Some(_) if self.input.up => {}
                    Some(_) => self.descend(tuning.wall_slide_speed, tuning),
                    None => self.descend(tuning.fall_speed, tuning),
                }
            }
        }
    }

    fn rise(&mut self, tuning: &Tuning) {
        self.y += self.jump_speed;
        self.jump_speed -= tuning.jump_speed_decay;

        if self.y >= tuning.ceiling() {
            self.y = tuning.ceiling();
            self.end_rise(tuning);
            return;
        }
        if self.jump_speed <= 0.0 {
            self.end_rise(tuning);
            return;
        }

        let gained = self.y - self.jump_ref;
        match self.phase {
            JumpPhase::RisingPrimary => {
                if gained < tuning.secondary_arc_height && !self.input.jump_held {
                    self.set_phase(JumpPhase::RisingSecondary);
                } else if gained >= tuning.primary_arc_height {
                    self.end_rise(tuning);
                }
            }
            JumpPhase::RisingSecondary => {
                if gained >= tuning.secondary_arc_height {
                    self.end_rise(tuning);
                }
            }
            JumpPhase::Grounded => {}
        }
    }

    fn end_rise(&mut self, tuning: &Tuning) {
        self.jump_speed = tuning.fall_speed;
        self.set_phase(JumpPhase::Grounded);
    }

    fn descend(&mut self, speed: f32, tuning: &Tuning) {
        if !self.is_airborne(tuning) {
            return;
        }

        self.y -= speed;
        // Any fall gives up the old reference; the next one is set on landing
        // or by a wall jump.
        self.jump_ref = tuning.platform_height;
        if self.y <= tuning.platform_height {
            self.y = tuning.platform_height;
            if self.wall.take().is_some() {
                log::debug!("landed off the wall");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(p: &mut PlayerState, t: &Tuning, input: InputFlags) {
        p.input = input;
        p.update(t);
    }

    #[test]
    fn new_player_starts_at_start_position() {
        let t = Tuning::default();
        let p = PlayerState::new(&t);
        assert_eq!((p.x, p.y, p.jump_ref), (100.0, 240.0, 240.0));
        assert_eq!(p.phase, JumpPhase::Grounded);
        assert!(p.is_resting(&t));
    }

    #[test]
    fn first_rising_tick_uses_initial_speed() {
        let t = Tuning::default();
        let mut p = PlayerState::new(&t);
        tick(&mut p, &t, InputFlags { jump_pressed: true, jump_held: true, ..Default::default() });
        assert_eq!(p.phase, JumpPhase::RisingPrimary);
        assert_eq!(p.y, 248.0);
        assert!((p.jump_speed - 7.8).abs() < 1e-5);
    }

    #[test]
    fn early_release_switches_to_secondary() {
        let t = Tuning::default();
        let mut p = PlayerState::new(&t);
        tick(&mut p, &t, InputFlags { jump_pressed: true, ..Default::default() });
        assert_eq!(p.phase, JumpPhase::RisingSecondary);
    }

    #[test]
    fn jump_needs_rest_or_wall() {
        let t = Tuning::default();
        let mut p = PlayerState::new(&t);
        p.y = 300.0;
        tick(&mut p, &t, InputFlags { jump_pressed: true, ..Default::default() });
        assert_eq!(p.phase, JumpPhase::Grounded);
        assert_eq!(p.y, 297.0);
    }

    #[test]
    fn falling_below_start_reference_is_not_resting() {
        let t = Tuning::default();
        let mut p = PlayerState::new(&t);
        tick(&mut p, &t, InputFlags::default());
        assert_eq!(p.y, 237.0);
        assert!(!p.is_resting(&t));
    }

    #[test]
    fn falling_lands_on_platform_and_moves_reference() {
        let t = Tuning::default();
        let mut p = PlayerState::new(&t);
        p.y = 152.0;
        tick(&mut p, &t, InputFlags::default());
        assert_eq!(p.y, 150.0);
        assert_eq!(p.jump_ref, 150.0);
        tick(&mut p, &t, InputFlags::default());
        assert_eq!(p.y, 150.0);
    }

    #[test]
    fn opposite_directions_cancel() {
        let t = Tuning::default();
        let mut p = PlayerState::new(&t);
        p.y = t.platform_height;
        tick(&mut p, &t, InputFlags { left: true, right: true, ..Default::default() });
        assert_eq!(p.x, 100.0);
    }

    #[test]
    fn free_mode_clamp_in_air_breaks_upward() {
        let t = Tuning::default();
        let mut p = PlayerState::new(&t);
        p.x = 1.0;
        p.y = 200.0;
        p.jump_ref = 150.0;
        tick(&mut p, &t, InputFlags { left: true, ..Default::default() });
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 200.0 + 1.0 - 3.0);
        assert_eq!(p.wall, None);
    }

    #[test]
    fn clamp_on_platform_does_not_break() {
        let t = Tuning::default();
        let mut p = PlayerState::new(&t);
        p.x = 779.0;
        p.y = 150.0;
        p.jump_ref = 150.0;
        tick(&mut p, &t, InputFlags { right: true, ..Default::default() });
        assert_eq!(p.x, 780.0);
        assert_eq!(p.y, 150.0);
    }

    #[test]
    fn toggling_to_free_detaches() {
        let t = Tuning::default();
        let mut p = PlayerState::new(&t);
        p.movement_mode = MovementMode::WallSlide;
        p.wall = Some(WallSide::Right);
        let controls = Controls { toggle_wall_lock: true, ..Default::default() };
        p.apply_controls(&controls, &t);
        assert_eq!(p.movement_mode, MovementMode::Free);
        assert_eq!(p.wall, None);
    }
}
