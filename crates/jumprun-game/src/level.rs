use jumprun_engine::coords::{Mat4, Rect};
use jumprun_engine::paint::Color;
use jumprun_engine::render::ColorVertex;

use crate::physics::PlayerState;
use crate::tuning::Tuning;

/// The static level: a platform along the bottom and a wall at the right edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LevelGeometry {
    pub platform: Rect,
    pub wall: Rect,
}

impl LevelGeometry {
    pub const PLATFORM_COLOR: Color = Color::from_premul(0.35, 0.55, 0.35, 1.0);
    pub const WALL_COLOR: Color = Color::from_premul(0.5, 0.5, 0.55, 1.0);
    pub const PLAYER_COLOR: Color = Color::WHITE;

    pub fn new(tuning: &Tuning) -> Self {
        Self {
            platform: Rect::new(
                tuning.platform_x,
                0.0,
                tuning.platform_width,
                tuning.platform_height,
            ),
            wall: Rect::new(
                tuning.canvas_width - tuning.wall_width,
                0.0,
                tuning.wall_width,
                tuning.canvas_height,
            ),
        }
    }

    /// Level quads, drawn with the identity model matrix.
    pub fn quads(&self) -> [[ColorVertex; 4]; 2] {
        [
            ColorVertex::quad(self.platform, Self::PLATFORM_COLOR),
            ColorVertex::quad(self.wall, Self::WALL_COLOR),
        ]
    }
}

/// Player quad at the origin; [`player_model`] moves it into place.
pub fn player_quad(tuning: &Tuning) -> [ColorVertex; 4] {
    ColorVertex::quad(
        Rect::new(0.0, 0.0, tuning.player_width, tuning.player_height),
        LevelGeometry::PLAYER_COLOR,
    )
}

pub fn player_model(player: &PlayerState) -> Mat4 {
    Mat4::translation(player.x, player.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumprun_engine::coords::Vec2;

    #[test]
    fn wall_touches_right_canvas_edge_and_corridor_end() {
        let t = Tuning::default();
        let level = LevelGeometry::new(&t);
        assert_eq!(level.wall.max(), Vec2::new(840.0, 360.0));
        assert_eq!(level.wall.min().x, t.corridor_end() + t.player_width);
        assert_eq!(level.platform.max(), Vec2::new(800.0, 150.0));
    }

    #[test]
    fn player_model_places_quad_at_position() {
        let t = Tuning::default();
        let player = PlayerState::new(&t);
        let model = player_model(&player);
        let [_, _, _, bottom_left] = player_quad(&t);
        let p = model.transform_point(Vec2::new(bottom_left.position[0], bottom_left.position[1]));
        assert_eq!(p, Vec2::new(100.0, 240.0));
    }
}
