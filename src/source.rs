//! Synthetic demo input sources.
//!
//! These exercise a receiver end-to-end without any physical device: the
//! mouse source sweeps the pointer in a small circle, the gamepad source
//! circles both sticks while stepping through every button. Real device
//! polling (an event pump over actual controllers) plugs in through the
//! same [`InputSource`] trait.

use std::f64::consts::PI;

use forward_core::{InputError, InputSource};
use hid_report_proto::{GamepadButtons, GamepadState, MouseState};

/// Ticks per phase revolution for both demo patterns.
const TICKS_PER_CYCLE: f64 = 200.0;

/// Mouse demo: small circular pointer movement, no buttons.
pub struct MouseWave {
    tick: u32,
}

impl MouseWave {
    #[must_use]
    pub fn new() -> Self {
        Self { tick: 0 }
    }
}

impl Default for MouseWave {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for MouseWave {
    type State = MouseState;

    fn poll(&mut self) -> Result<MouseState, InputError> {
        let phase = 2.0 * PI * f64::from(self.tick) / TICKS_PER_CYCLE;
        self.tick = self.tick.wrapping_add(1);
        Ok(MouseState {
            x: (4.0 * phase.sin()) as i16,
            y: (4.0 * phase.cos()) as i16,
            ..MouseState::neutral()
        })
    }
}

/// Ticks each button is held during the gamepad demo cycle.
const BUTTON_SLOT_TICKS: u32 = 50;

/// Number of controls stepped through: 14 buttons plus 4 dpad directions.
const BUTTON_SLOTS: u32 = 18;

/// Gamepad demo: sticks circle at full deflection while each button (and
/// dpad direction) is pressed in turn.
pub struct GamepadCycle {
    tick: u32,
}

impl GamepadCycle {
    #[must_use]
    pub fn new() -> Self {
        Self { tick: 0 }
    }
}

impl Default for GamepadCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for GamepadCycle {
    type State = GamepadState;

    fn poll(&mut self) -> Result<GamepadState, InputError> {
        let phase = 2.0 * PI * f64::from(self.tick) / TICKS_PER_CYCLE;
        let mut state = GamepadState::neutral();

        // Full-deflection circles, clamped into [0, 255] at the boundary.
        state.set_left_stick(
            (128.0 + 127.0 * phase.sin()) as i32,
            (128.0 + 127.0 * phase.cos()) as i32,
        );
        state.set_right_stick(
            (128.0 - 127.0 * phase.sin()) as i32,
            (128.0 + 127.0 * phase.cos()) as i32,
        );

        let slot = (self.tick % (BUTTON_SLOTS * BUTTON_SLOT_TICKS)) / BUTTON_SLOT_TICKS;
        match slot {
            0 => state.buttons.set(GamepadButtons::B, true),
            1 => state.buttons.set(GamepadButtons::A, true),
            2 => state.buttons.set(GamepadButtons::Y, true),
            3 => state.buttons.set(GamepadButtons::X, true),
            4 => state.buttons.set(GamepadButtons::L, true),
            5 => state.buttons.set(GamepadButtons::R, true),
            6 => state.buttons.set(GamepadButtons::ZL, true),
            7 => state.buttons.set(GamepadButtons::ZR, true),
            8 => state.buttons.set(GamepadButtons::MINUS, true),
            9 => state.buttons.set(GamepadButtons::PLUS, true),
            10 => state.buttons.set(GamepadButtons::LS, true),
            11 => state.buttons.set(GamepadButtons::RS, true),
            12 => state.buttons.set(GamepadButtons::HOME, true),
            13 => state.buttons.set(GamepadButtons::CAPTURE, true),
            14 => state.dpad.left = true,
            15 => state.dpad.right = true,
            16 => state.dpad.up = true,
            17 => state.dpad.down = true,
            _ => {}
        }

        self.tick = self.tick.wrapping_add(1);
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_wave_starts_at_top_of_circle() {
        let mut source = MouseWave::new();
        let state = source.poll().unwrap();
        assert_eq!(state.x, 0);
        assert_eq!(state.y, 4);
        assert!(state.buttons.is_empty());
    }

    #[test]
    fn test_mouse_wave_quarter_cycle() {
        let mut source = MouseWave::new();
        let mut state = source.poll().unwrap();
        for _ in 0..50 {
            state = source.poll().unwrap();
        }
        // Quarter turn: sin at maximum, cos near zero.
        assert_eq!(state.x, 4);
        assert_eq!(state.y, 0);
    }

    #[test]
    fn test_gamepad_cycle_first_slot_presses_b() {
        let mut source = GamepadCycle::new();
        let state = source.poll().unwrap();
        assert!(state.buttons.contains(GamepadButtons::B));
        assert_eq!(state.buttons.raw().count_ones(), 1);
        assert!(state.dpad.is_neutral());
        // Phase zero: lx centered, ly at full positive deflection.
        assert_eq!(state.lx, 128);
        assert_eq!(state.ly, 255);
        assert_eq!(state.rx, 128);
        assert_eq!(state.ry, 255);
    }

    #[test]
    fn test_gamepad_cycle_reaches_dpad_slots() {
        let mut source = GamepadCycle::new();
        let mut state = source.poll().unwrap();
        for _ in 0..(14 * BUTTON_SLOT_TICKS) {
            state = source.poll().unwrap();
        }
        assert!(state.buttons.is_empty());
        assert!(state.dpad.left);
    }

    #[test]
    fn test_gamepad_cycle_axes_stay_in_range() {
        let mut source = GamepadCycle::new();
        for _ in 0..(BUTTON_SLOTS * BUTTON_SLOT_TICKS) {
            let state = source.poll().unwrap();
            // u8 fields cannot be out of range; check the sticks mirror.
            assert_eq!(state.ly, state.ry);
        }
    }
}
