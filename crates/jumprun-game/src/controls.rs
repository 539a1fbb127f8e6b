use jumprun_engine::input::{InputFrame, InputState, Key};

use crate::physics::InputFlags;

const LEFT: &[Key] = &[Key::ArrowLeft, Key::A];
const RIGHT: &[Key] = &[Key::ArrowRight, Key::D];
const UP: &[Key] = &[Key::ArrowUp, Key::W];
const DOWN: &[Key] = &[Key::ArrowDown, Key::S];
const JUMP: Key = Key::Space;
const RESET: Key = Key::R;
const TOGGLE_WALL_LOCK: Key = Key::L;
const EXIT: Key = Key::Escape;

/// Game actions polled from the input snapshot once per frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Controls {
    pub flags: InputFlags,
    pub reset: bool,
    pub toggle_wall_lock: bool,
    pub exit: bool,
}

impl Controls {
    /// Held keys come from `state`, presses from `frame`.
    pub fn poll(state: &InputState, frame: &InputFrame) -> Self {
        Self {
            flags: InputFlags {
                left: state.any_down(LEFT),
                right: state.any_down(RIGHT),
                up: state.any_down(UP),
                down: state.any_down(DOWN),
                jump_held: state.key_down(JUMP),
                jump_pressed: frame.pressed(JUMP),
            },
            reset: frame.pressed(RESET),
            toggle_wall_lock: frame.pressed(TOGGLE_WALL_LOCK),
            exit: frame.pressed(EXIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumprun_engine::input::{InputEvent, KeyState};

    fn key(state: &mut InputState, frame: &mut InputFrame, key: Key, ks: KeyState) {
        state.apply_event(
            frame,
            InputEvent::Key {
                key,
                state: ks,
                repeat: false,
            },
        );
    }

    #[test]
    fn arrows_and_wasd_map_to_the_same_flags() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        key(&mut state, &mut frame, Key::A, KeyState::Pressed);
        key(&mut state, &mut frame, Key::ArrowUp, KeyState::Pressed);

        let c = Controls::poll(&state, &frame);
        assert!(c.flags.left && c.flags.up);
        assert!(!c.flags.right && !c.flags.down);
    }

    #[test]
    fn jump_press_is_edge_triggered() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        key(&mut state, &mut frame, Key::Space, KeyState::Pressed);

        let c = Controls::poll(&state, &frame);
        assert!(c.flags.jump_pressed && c.flags.jump_held);

        frame.clear();
        let c = Controls::poll(&state, &frame);
        assert!(!c.flags.jump_pressed);
        assert!(c.flags.jump_held);
    }

    #[test]
    fn command_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        key(&mut state, &mut frame, Key::R, KeyState::Pressed);
        key(&mut state, &mut frame, Key::L, KeyState::Pressed);
        key(&mut state, &mut frame, Key::Escape, KeyState::Pressed);

        let c = Controls::poll(&state, &frame);
        assert!(c.reset && c.toggle_wall_lock && c.exit);
    }
}
