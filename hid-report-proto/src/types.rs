//! Device state snapshots: MouseState, GamepadState, and their button bitfields.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Axis value for a centered analog stick.
pub const AXIS_CENTER: u8 = 128;

/// Minimum analog axis value.
pub const AXIS_MIN: u8 = 0;

/// Maximum analog axis value.
pub const AXIS_MAX: u8 = 255;

/// Clamp a wide axis computation into the on-wire `[0, 255]` range.
///
/// Axis values are typically assembled as `128 + offset` from a wider input
/// range and may overshoot; this folds them back into range before they are
/// stored in a [`GamepadState`].
///
/// # Example
///
/// ```
/// use hid_report_proto::clamp_axis;
///
/// assert_eq!(clamp_axis(-1), 0);
/// assert_eq!(clamp_axis(128), 128);
/// assert_eq!(clamp_axis(256), 255);
/// ```
#[inline]
#[must_use]
pub const fn clamp_axis(raw: i32) -> u8 {
    if raw < AXIS_MIN as i32 {
        AXIS_MIN
    } else if raw > AXIS_MAX as i32 {
        AXIS_MAX
    } else {
        raw as u8
    }
}

/// Mouse button state represented as a bitfield.
///
/// # Example
///
/// ```
/// use hid_report_proto::MouseButtons;
///
/// let buttons = MouseButtons::LEFT | MouseButtons::MIDDLE;
/// assert!(buttons.contains(MouseButtons::LEFT));
/// assert!(!buttons.contains(MouseButtons::RIGHT));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseButtons(pub u8);

impl MouseButtons {
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const MIDDLE: Self = Self(1 << 2);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: MouseButtons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: MouseButtons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw bitfield value as it appears on the wire.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for MouseButtons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for MouseButtons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for MouseButtons {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for MouseButtons {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for MouseButtons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// Gamepad button state represented as a bitfield.
///
/// The low byte holds the face/shoulder buttons (report field `buttons1`),
/// the high byte holds the system buttons (report field `buttons2`). Bit
/// positions match the wire layout exactly.
///
/// # Example
///
/// ```
/// use hid_report_proto::GamepadButtons;
///
/// let buttons = GamepadButtons::A | GamepadButtons::ZR;
/// assert!(buttons.contains(GamepadButtons::A));
/// assert_eq!(buttons.low_bits(), 0b1000_0100);
/// assert_eq!(buttons.high_bits(), 0);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadButtons(pub u16);

impl GamepadButtons {
    // buttons1 (low byte)
    pub const Y: Self = Self(1 << 0);
    pub const B: Self = Self(1 << 1);
    pub const A: Self = Self(1 << 2);
    pub const X: Self = Self(1 << 3);
    pub const L: Self = Self(1 << 4);
    pub const R: Self = Self(1 << 5);
    pub const ZL: Self = Self(1 << 6);
    pub const ZR: Self = Self(1 << 7);

    // buttons2 (high byte)
    pub const MINUS: Self = Self(1 << 8);
    pub const PLUS: Self = Self(1 << 9);
    pub const LS: Self = Self(1 << 10); // Left stick press
    pub const RS: Self = Self(1 << 11); // Right stick press
    pub const HOME: Self = Self(1 << 12);
    pub const CAPTURE: Self = Self(1 << 13);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: GamepadButtons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: GamepadButtons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The `buttons1` report byte: Y, B, A, X, L, R, ZL, ZR.
    #[inline]
    #[must_use]
    pub const fn low_bits(self) -> u8 {
        self.0 as u8
    }

    /// The `buttons2` report byte: minus, plus, LS, RS, home, capture.
    #[inline]
    #[must_use]
    pub const fn high_bits(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for GamepadButtons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for GamepadButtons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for GamepadButtons {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for GamepadButtons {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for GamepadButtons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// Hat-switch lookup table, indexed by `left | right<<1 | up<<2 | down<<3`.
///
/// Conflicting combinations (e.g. left+right) fold to the neutral code 15 or
/// to one of the eight compass directions; the receiver treats the cells as
/// given, so they are kept verbatim rather than recomputed from geometry.
const HAT_LUT: [u8; 16] = [15, 6, 2, 15, 0, 7, 1, 0, 4, 5, 3, 4, 15, 6, 2, 15];

/// Directional pad state.
///
/// The four direction flags are independent booleans; [`Dpad::code`] folds
/// them into the single hat-switch byte the receiver expects.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dpad {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Dpad {
    /// No direction pressed.
    pub const NEUTRAL: Self = Self {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    /// Hat-switch code for the current direction combination.
    ///
    /// 0 = up, then clockwise through 7 = up-left; 15 = neutral.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        HAT_LUT[self.left as usize
            | (self.right as usize) << 1
            | (self.up as usize) << 2
            | (self.down as usize) << 3]
    }

    /// Check if no direction is pressed.
    #[inline]
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        !self.left && !self.right && !self.up && !self.down
    }
}

/// Complete mouse state snapshot.
///
/// Movement and scroll fields are signed deltas since the previous report;
/// there is no center value.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseState {
    pub buttons: MouseButtons,
    pub x: i16,
    pub y: i16,
    pub vscroll: i16,
    pub hscroll: i16,
}

impl MouseState {
    /// Create a neutral mouse state (no buttons, no movement).
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: MouseButtons::NONE,
            x: 0,
            y: 0,
            vscroll: 0,
            hscroll: 0,
        }
    }
}

/// Complete gamepad state snapshot.
///
/// Contains all inputs for the gamepad layout:
/// - 14 buttons (bitfield)
/// - directional pad (four flags, encoded as a hat switch)
/// - 2 analog sticks, one unsigned byte per axis, centered at 128
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadState {
    pub buttons: GamepadButtons,
    pub dpad: Dpad,
    pub lx: u8,
    pub ly: u8,
    pub rx: u8,
    pub ry: u8,
}

impl GamepadState {
    /// Create a neutral gamepad state (no buttons pressed, sticks centered).
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: GamepadButtons::NONE,
            dpad: Dpad::NEUTRAL,
            lx: AXIS_CENTER,
            ly: AXIS_CENTER,
            rx: AXIS_CENTER,
            ry: AXIS_CENTER,
        }
    }

    /// Set the left stick from wide axis computations, clamping into range.
    #[inline]
    pub fn set_left_stick(&mut self, x: i32, y: i32) {
        self.lx = clamp_axis(x);
        self.ly = clamp_axis(y);
    }

    /// Set the right stick from wide axis computations, clamping into range.
    #[inline]
    pub fn set_right_stick(&mut self, x: i32, y: i32) {
        self.rx = clamp_axis(x);
        self.ry = clamp_axis(y);
    }
}

impl Default for GamepadState {
    fn default() -> Self {
        Self::neutral()
    }
}
