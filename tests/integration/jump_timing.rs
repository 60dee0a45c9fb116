//! Coyote time and jump buffering driven through the public controller.

use platformer_kit::gameplay::player::{JumpController, JumpSettings};

const DT: f32 = 1.0 / 60.0;

fn settings() -> JumpSettings {
    JumpSettings {
        coyote_time: 0.1,
        buffer_time: 0.1,
        ..JumpSettings::default()
    }
}

/// Runs `ticks` idle frames with the given ground contact.
fn idle(controller: &mut JumpController, grounded: bool, ticks: usize) {
    for _ in 0..ticks {
        assert!(!controller.tick(&settings(), grounded, false, DT));
    }
}

#[test]
fn run_off_ledge_then_jump_within_coyote() {
    let mut controller = JumpController::default();
    idle(&mut controller, true, 10);
    idle(&mut controller, false, 4);
    assert!(controller.tick(&settings(), false, true, DT));
}

#[test]
fn late_jump_is_buffered_until_landing() {
    let mut controller = JumpController::default();
    idle(&mut controller, false, 30);
    assert!(!controller.tick(&settings(), false, true, DT));
    idle(&mut controller, false, 3);
    assert!(controller.tick(&settings(), true, false, DT));
}

#[test]
fn jump_does_not_repeat_without_new_press() {
    let mut controller = JumpController::default();
    assert!(controller.tick(&settings(), true, true, DT));
    for _ in 0..30 {
        assert!(!controller.tick(&settings(), true, false, DT));
    }
}

#[test]
fn gates_never_go_negative() {
    let mut controller = JumpController::default();
    controller.tick(&settings(), true, true, DT);
    for _ in 0..100 {
        controller.tick(&settings(), false, false, 0.5);
        assert!(controller.coyote.remaining() >= 0.0);
        assert!(controller.buffer.remaining() >= 0.0);
    }
}
