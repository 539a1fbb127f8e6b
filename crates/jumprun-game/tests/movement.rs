use jumprun_game::{Controls, InputFlags, JumpPhase, MovementMode, PlayerState, Tuning, WallSide};

const EPS: f32 = 1e-3;

fn held(flags: InputFlags) -> Controls {
    Controls { flags, ..Default::default() }
}

fn step(p: &mut PlayerState, t: &Tuning, flags: InputFlags) {
    p.apply_controls(&held(flags), t);
    p.update(t);
}

fn jump_press() -> InputFlags {
    InputFlags { jump_pressed: true, jump_held: true, ..Default::default() }
}

fn jump_hold() -> InputFlags {
    InputFlags { jump_held: true, ..Default::default() }
}

/// Runs until the player rests on the platform; returns the highest `y` seen.
fn run_until_landed(p: &mut PlayerState, t: &Tuning, mut input: impl FnMut(u32) -> InputFlags) -> f32 {
    let mut peak = p.y;
    for tick in 0..1_000 {
        step(p, t, input(tick));
        peak = peak.max(p.y);
        if p.y <= t.platform_height && !p.phase.is_rising() {
            return peak;
        }
    }
    panic!("player never landed: {p:?}");
}

#[test]
fn jump_from_start_rises_to_primary_height_then_falls_to_platform() {
    let t = Tuning::default();
    let mut p = PlayerState::new(&t);

    step(&mut p, &t, jump_press());
    assert_eq!(p.phase, JumpPhase::RisingPrimary);

    let mut last = p.y;
    while p.phase.is_rising() {
        step(&mut p, &t, jump_hold());
        assert!(p.y >= last, "rise must be monotonic");
        last = p.y;
    }

    let peak = p.y;
    assert!((peak - 240.0 - 100.0).abs() < EPS, "peak {peak}");

    let mut prev = p.y;
    while p.y > t.platform_height {
        step(&mut p, &t, InputFlags::default());
        let fell = prev - p.y;
        assert!(fell <= 3.0 + EPS);
        if p.y > t.platform_height {
            assert!((fell - 3.0).abs() < EPS, "falls at 3 per tick, got {fell}");
        }
        prev = p.y;
    }

    assert_eq!(p.y, 150.0);
    assert_eq!(p.jump_ref, 150.0);
    assert_eq!(p.phase, JumpPhase::Grounded);
}

#[test]
fn held_jump_from_platform_overshoots_primary_by_less_than_a_tick() {
    let t = Tuning::default();
    let mut p = PlayerState::new(&t);
    p.y = t.platform_height;
    p.jump_ref = t.platform_height;

    let peak = run_until_landed(&mut p, &t, |tick| if tick == 0 { jump_press() } else { jump_hold() });
    let gained = peak - t.platform_height;
    assert!(gained >= 100.0 - EPS);
    assert!(gained < 100.0 + t.initial_jump_speed, "gained {gained}");
}

#[test]
fn releasing_jump_early_gives_a_lower_peak() {
    let t = Tuning::default();

    let mut held = PlayerState::new(&t);
    held.y = t.platform_height;
    held.jump_ref = t.platform_height;
    let full = run_until_landed(&mut held, &t, |tick| if tick == 0 { jump_press() } else { jump_hold() });

    let mut tapped = PlayerState::new(&t);
    tapped.y = t.platform_height;
    tapped.jump_ref = t.platform_height;
    let short = run_until_landed(&mut tapped, &t, |tick| {
        if tick == 0 {
            InputFlags { jump_pressed: true, ..Default::default() }
        } else {
            InputFlags::default()
        }
    });

    assert!(short < full, "short {short} vs full {full}");
    let gained = short - t.platform_height;
    assert!(gained >= 50.0 - EPS && gained < 50.0 + t.initial_jump_speed, "gained {gained}");
}

#[test]
fn x_stays_in_corridor_under_any_input() {
    let t = Tuning::default();
    for mode in [MovementMode::Free, MovementMode::WallSlide] {
        let mut p = PlayerState::new(&t);
        p.movement_mode = mode;

        for tick in 0u32..3_000 {
            // Deterministic pseudo-random input.
            let bits = tick.wrapping_mul(2_654_435_761).rotate_left(7);
            let flags = InputFlags {
                left: bits & 1 != 0,
                right: bits & 2 != 0 && tick % 300 > 150,
                up: bits & 4 != 0,
                down: bits & 8 != 0,
                jump_held: bits & 16 != 0,
                jump_pressed: bits & 32 != 0,
            };
            step(&mut p, &t, flags);

            assert!(p.x >= t.corridor_start && p.x <= t.corridor_end(), "x={} at {tick}", p.x);
            assert!(p.y >= t.platform_height && p.y <= t.ceiling(), "y={} at {tick}", p.y);
        }
    }
}

#[test]
fn clamping_at_right_boundary_is_exact_and_breaks_once() {
    let t = Tuning::default();
    let mut p = PlayerState::new(&t);
    p.x = t.corridor_end() - 1.0;
    p.y = 250.0;
    p.jump_ref = 150.0;

    step(&mut p, &t, InputFlags { right: true, ..Default::default() });
    assert_eq!(p.x, 780.0);
    assert!((p.y - (250.0 + 1.0 - 3.0)).abs() < EPS);
}

#[test]
fn no_break_while_rising() {
    let t = Tuning::default();
    let mut p = PlayerState::new(&t);
    p.x = t.corridor_end();

    step(&mut p, &t, InputFlags { right: true, ..jump_press() });
    assert_eq!(p.phase, JumpPhase::RisingPrimary);
    assert_eq!(p.x, 780.0);
    assert_eq!(p.y, 248.0);
}

#[test]
fn reset_restores_start_from_any_state() {
    let t = Tuning::default();
    let mut p = PlayerState::new(&t);

    step(&mut p, &t, InputFlags { right: true, ..jump_press() });
    for _ in 0..10 {
        step(&mut p, &t, InputFlags { right: true, ..jump_hold() });
    }
    p.wall = Some(WallSide::Right);

    p.apply_controls(&Controls { reset: true, ..Default::default() }, &t);
    assert_eq!((p.x, p.y, p.jump_ref), (100.0, 240.0, 240.0));
    assert_eq!(p.phase, JumpPhase::Grounded);
    assert_eq!(p.jump_speed, t.initial_jump_speed);
    assert_eq!(p.wall, None);
}

#[test]
fn wall_jump_from_free_mode_boundary() {
    let t = Tuning::default();
    let mut p = PlayerState::new(&t);
    p.x = 0.0;
    p.y = 200.0;
    p.jump_ref = 150.0;

    step(&mut p, &t, InputFlags { jump_pressed: true, ..Default::default() });
    assert!(p.phase.is_rising());
    assert_eq!(p.jump_ref, 200.0);
}

#[test]
fn wall_slide_attaches_slides_and_detaches() {
    let t = Tuning { movement_mode: MovementMode::WallSlide, ..Tuning::default() };
    let mut p = PlayerState::new(&t);
    p.x = t.corridor_end() - 2.0;
    p.y = 300.0;
    p.jump_ref = 150.0;

    step(&mut p, &t, InputFlags { right: true, ..Default::default() });
    assert_eq!(p.wall, Some(WallSide::Right));
    assert_eq!(p.x, 780.0);
    assert_eq!(p.y, 299.0, "slides instead of falling");

    // Horizontal input is ignored while attached.
    step(&mut p, &t, InputFlags { left: true, ..Default::default() });
    assert_eq!(p.x, 780.0);
    assert_eq!(p.y, 298.0);

    // Holding up grips.
    step(&mut p, &t, InputFlags { up: true, ..Default::default() });
    assert_eq!(p.y, 298.0);

    // Holding down lets go.
    step(&mut p, &t, InputFlags { down: true, ..Default::default() });
    assert_eq!(p.wall, None);
    assert_eq!(p.y, 295.0);
}

#[test]
fn wall_slide_jump_detaches() {
    let t = Tuning { movement_mode: MovementMode::WallSlide, ..Tuning::default() };
    let mut p = PlayerState::new(&t);
    p.x = 0.0;
    p.y = 280.0;
    p.jump_ref = 150.0;
    p.wall = Some(WallSide::Left);

    step(&mut p, &t, jump_press());
    assert_eq!(p.wall, None);
    assert_eq!(p.phase, JumpPhase::RisingPrimary);
    assert_eq!(p.jump_ref, 280.0);
}

#[test]
fn wall_slide_ends_on_landing() {
    let t = Tuning { movement_mode: MovementMode::WallSlide, ..Tuning::default() };
    let mut p = PlayerState::new(&t);
    p.x = 780.0;
    p.y = 150.5;
    p.jump_ref = 150.0;
    p.wall = Some(WallSide::Right);

    step(&mut p, &t, InputFlags::default());
    assert_eq!(p.y, 150.0);
    assert_eq!(p.wall, None);
}

#[test]
fn falling_from_start_cannot_jump_in_mid_air() {
    let t = Tuning::default();
    let mut p = PlayerState::new(&t);
    for _ in 0..10 {
        step(&mut p, &t, InputFlags::default());
    }
    assert_eq!(p.y, 210.0);
    assert!(!p.is_flush(&t));

    step(&mut p, &t, jump_press());
    assert_eq!(p.phase, JumpPhase::Grounded);
    assert_eq!(p.y, 207.0);
}

#[test]
fn no_second_jump_after_leaving_the_wall() {
    let t = Tuning::default();
    let mut p = PlayerState::new(&t);
    p.x = 0.0;
    p.y = 200.0;
    p.jump_ref = 150.0;

    let away = InputFlags { right: true, ..Default::default() };
    step(&mut p, &t, InputFlags { jump_pressed: true, ..away });
    assert!(p.phase.is_rising());
    while p.phase.is_rising() {
        step(&mut p, &t, away);
    }

    while p.y > t.platform_height {
        assert!(!p.is_flush(&t));
        step(&mut p, &t, InputFlags { jump_pressed: true, jump_held: true, ..away });
        assert_eq!(p.phase, JumpPhase::Grounded, "jumped in mid-air at y={}", p.y);
    }
}
