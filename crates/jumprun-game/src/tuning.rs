use std::fmt;

/// Environment variable that selects [`MovementMode::WallSlide`] at startup.
pub const WALL_LOCK_ENV: &str = "JUMPRUN_WALL_LOCK";

/// How the player reacts to hitting a corridor boundary in the air.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum MovementMode {
    /// Clamp to the boundary and get a small upward correction.
    #[default]
    Free,
    /// Stick to the boundary and slide down it.
    WallSlide,
}

impl MovementMode {
    pub fn toggled(self) -> Self {
        match self {
            MovementMode::Free => MovementMode::WallSlide,
            MovementMode::WallSlide => MovementMode::Free,
        }
    }

    /// Reads [`WALL_LOCK_ENV`]; unset or unrecognized values keep `Free`.
    pub fn from_env() -> Self {
        match std::env::var(WALL_LOCK_ENV) {
            Ok(value) => Self::parse_flag(&value).unwrap_or_else(|| {
                log::warn!("ignoring {WALL_LOCK_ENV}={value:?}; expected 1/0/true/false");
                MovementMode::Free
            }),
            Err(_) => MovementMode::Free,
        }
    }

    fn parse_flag(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Some(MovementMode::WallSlide),
            "0" | "false" | "off" | "no" | "" => Some(MovementMode::Free),
            _ => None,
        }
    }
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementMode::Free => f.write_str("free"),
            MovementMode::WallSlide => f.write_str("wall slide"),
        }
    }
}

/// Movement constants and level dimensions, in canvas pixels and per-tick units.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,

    pub player_width: f32,
    pub player_height: f32,

    /// The wall spans the full canvas height at the right edge.
    pub wall_width: f32,

    pub platform_x: f32,
    pub platform_width: f32,
    /// Top edge of the platform; the lowest the player can stand.
    pub platform_height: f32,

    /// Left end of the walkable corridor.
    pub corridor_start: f32,

    pub start_x: f32,
    pub start_y: f32,

    pub horizontal_speed: f32,
    pub initial_jump_speed: f32,
    pub jump_speed_decay: f32,
    pub primary_arc_height: f32,
    pub secondary_arc_height: f32,
    pub fall_speed: f32,
    pub wall_slide_speed: f32,
    pub wall_break: f32,
    pub resting_tolerance: f32,

    pub movement_mode: MovementMode,
}

impl Default for Tuning {
    fn default() -> Self {
        let canvas_height = 360.0;
        Self {
            canvas_width: 840.0,
            canvas_height,

            player_width: 20.0,
            player_height: 20.0,

            wall_width: 40.0,

            platform_x: 0.0,
            platform_width: 800.0,
            platform_height: 150.0,

            corridor_start: 0.0,

            start_x: 100.0,
            start_y: canvas_height - canvas_height / 3.0,

            horizontal_speed: 3.0,
            initial_jump_speed: 8.0,
            jump_speed_decay: 0.2,
            primary_arc_height: 100.0,
            secondary_arc_height: 50.0,
            fall_speed: 3.0,
            wall_slide_speed: 1.0,
            wall_break: 1.0,
            resting_tolerance: 0.0,

            movement_mode: MovementMode::Free,
        }
    }
}

impl Tuning {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self {
            movement_mode: MovementMode::from_env(),
            ..Self::default()
        }
    }

    /// Right end of the walkable corridor (player's left edge).
    pub fn corridor_end(&self) -> f32 {
        self.canvas_width - self.wall_width - self.player_width
    }

    /// Highest `y` the player's bottom edge can reach.
    pub fn ceiling(&self) -> f32 {
        self.canvas_height - self.player_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_corridor_and_start() {
        let t = Tuning::default();
        assert_eq!(t.corridor_start, 0.0);
        assert_eq!(t.corridor_end(), 780.0);
        assert_eq!(t.ceiling(), 340.0);
        assert_eq!((t.start_x, t.start_y), (100.0, 240.0));
    }

    #[test]
    fn wall_lock_flag_values() {
        assert_eq!(MovementMode::parse_flag("1"), Some(MovementMode::WallSlide));
        assert_eq!(MovementMode::parse_flag(" TRUE "), Some(MovementMode::WallSlide));
        assert_eq!(MovementMode::parse_flag("0"), Some(MovementMode::Free));
        assert_eq!(MovementMode::parse_flag(""), Some(MovementMode::Free));
        assert_eq!(MovementMode::parse_flag("sticky"), None);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(MovementMode::Free.toggled(), MovementMode::WallSlide);
        assert_eq!(MovementMode::Free.toggled().toggled(), MovementMode::Free);
    }
}
