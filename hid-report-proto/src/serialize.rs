//! Fixed-layout binary report encoding.
//!
//! This module provides the [`Serialize`] trait for encoding [`MouseState`]
//! and [`GamepadState`] snapshots into the report bytes the receiver parses
//! by offset. Field order, width, and signedness are fixed per protocol
//! version; all multi-byte fields are little-endian.
//!
//! # Report Layouts
//!
//! Mouse (13 bytes):
//!
//! ```text
//! 01 00 09 01 <buttons:u8> <x:i16 LE> <y:i16 LE> <vscroll:i16 LE> <hscroll:i16 LE>
//! ```
//!
//! Gamepad (12 bytes):
//!
//! ```text
//! 01 02 08 00 <buttons1:u8> <buttons2:u8> <dpad:u8> <lx:u8> <ly:u8> <rx:u8> <ry:u8> 00
//! ```
//!
//! # Example
//!
//! ```
//! use hid_report_proto::{MouseState, Serialize};
//!
//! let state = MouseState { x: 4, y: -4, ..MouseState::neutral() };
//! let mut buf = [0u8; 16];
//! let len = state.serialize(&mut buf).unwrap();
//! assert_eq!(&buf[..len], &[0x01, 0x00, 0x09, 0x01, 0x00, 4, 0, 0xFC, 0xFF, 0, 0, 0, 0]);
//! ```

use crate::types::{GamepadState, MouseState};

/// Leading version byte of every report; the receiver rejects mismatches.
pub const PROTOCOL_VERSION: u8 = 1;

/// Size of an encoded mouse report.
pub const MOUSE_REPORT_LEN: usize = 13;

/// Size of an encoded gamepad report.
pub const GAMEPAD_REPORT_LEN: usize = 12;

/// Size of the largest report this protocol version defines.
pub const MAX_REPORT_LEN: usize = MOUSE_REPORT_LEN;

/// Descriptor number selecting the mouse report layout on the receiver.
const MOUSE_DESCRIPTOR: u8 = 0;
/// HID report id within the mouse descriptor.
const MOUSE_REPORT_ID: u8 = 1;
/// HID-level length byte carried in the mouse report header.
const MOUSE_HID_LENGTH: u8 = 9;

/// Descriptor number selecting the gamepad report layout on the receiver.
const GAMEPAD_DESCRIPTOR: u8 = 2;
/// HID report id within the gamepad descriptor.
const GAMEPAD_REPORT_ID: u8 = 0;
/// HID-level length byte carried in the gamepad report header.
const GAMEPAD_HID_LENGTH: u8 = 8;

/// Error type for report encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerializeError {
    /// The output buffer is too small to hold the encoded report.
    BufferTooSmall,
    /// A write operation failed (for I/O adapters).
    WriteError,
}

impl core::fmt::Display for SerializeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "buffer too small"),
            Self::WriteError => write!(f, "write error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SerializeError {}

/// Extension trait for encoding device reports.
///
/// Implemented for [`MouseState`] and [`GamepadState`]. Encoding is a pure
/// function of the snapshot: all fields are fixed-width integers that are
/// in range by construction, so the only failure mode is an undersized
/// output buffer.
pub trait Serialize {
    /// Upper bound on the encoded size, for sizing scratch buffers.
    const MAX_LEN: usize;

    /// Encode to the provided buffer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if the buffer is not large
    /// enough.
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError>;

    /// Encode to a `heapless::Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if `N` is not large enough.
    #[cfg(feature = "heapless")]
    fn serialize_to_vec<const N: usize>(&self) -> Result<heapless::Vec<u8, N>, SerializeError> {
        let mut vec = heapless::Vec::new();
        // Resize to full capacity to allow serialize() to write
        vec.resize(N, 0)
            .map_err(|_| SerializeError::BufferTooSmall)?;
        let len = self.serialize(&mut vec)?;
        vec.truncate(len);
        Ok(vec)
    }

    /// Encode to an `embedded_io::Write` implementation.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::WriteError`] if the write fails.
    #[cfg(feature = "embedded-io")]
    fn serialize_io<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), SerializeError>;
}

impl MouseState {
    /// Encode to the fixed 13-byte mouse report.
    #[must_use]
    pub fn to_report(&self) -> [u8; MOUSE_REPORT_LEN] {
        let mut report = [0u8; MOUSE_REPORT_LEN];
        report[0] = PROTOCOL_VERSION;
        report[1] = MOUSE_DESCRIPTOR;
        report[2] = MOUSE_HID_LENGTH;
        report[3] = MOUSE_REPORT_ID;
        report[4] = self.buttons.raw();
        report[5..7].copy_from_slice(&self.x.to_le_bytes());
        report[7..9].copy_from_slice(&self.y.to_le_bytes());
        report[9..11].copy_from_slice(&self.vscroll.to_le_bytes());
        report[11..13].copy_from_slice(&self.hscroll.to_le_bytes());
        report
    }
}

impl Serialize for MouseState {
    const MAX_LEN: usize = MOUSE_REPORT_LEN;

    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        if buf.len() < MOUSE_REPORT_LEN {
            return Err(SerializeError::BufferTooSmall);
        }
        buf[..MOUSE_REPORT_LEN].copy_from_slice(&self.to_report());
        Ok(MOUSE_REPORT_LEN)
    }

    #[cfg(feature = "embedded-io")]
    fn serialize_io<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), SerializeError> {
        writer
            .write_all(&self.to_report())
            .map_err(|_| SerializeError::WriteError)
    }
}

impl GamepadState {
    /// Encode to the fixed 12-byte gamepad report.
    #[must_use]
    pub fn to_report(&self) -> [u8; GAMEPAD_REPORT_LEN] {
        let mut report = [0u8; GAMEPAD_REPORT_LEN];
        report[0] = PROTOCOL_VERSION;
        report[1] = GAMEPAD_DESCRIPTOR;
        report[2] = GAMEPAD_HID_LENGTH;
        report[3] = GAMEPAD_REPORT_ID;
        report[4] = self.buttons.low_bits();
        report[5] = self.buttons.high_bits();
        report[6] = self.dpad.code();
        report[7] = self.lx;
        report[8] = self.ly;
        report[9] = self.rx;
        report[10] = self.ry;
        // report[11] is reserved padding, already zero
        report
    }
}

impl Serialize for GamepadState {
    const MAX_LEN: usize = GAMEPAD_REPORT_LEN;

    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        if buf.len() < GAMEPAD_REPORT_LEN {
            return Err(SerializeError::BufferTooSmall);
        }
        buf[..GAMEPAD_REPORT_LEN].copy_from_slice(&self.to_report());
        Ok(GAMEPAD_REPORT_LEN)
    }

    #[cfg(feature = "embedded-io")]
    fn serialize_io<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), SerializeError> {
        writer
            .write_all(&self.to_report())
            .map_err(|_| SerializeError::WriteError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dpad, GamepadButtons, MouseButtons};

    #[test]
    fn test_mouse_report_neutral() {
        let report = MouseState::neutral().to_report();
        assert_eq!(report.len(), MOUSE_REPORT_LEN);
        assert_eq!(&report[..4], &[1, 0, 9, 1]);
        assert!(report[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_mouse_report_known_bytes() {
        // Left button held, small diagonal movement.
        let state = MouseState {
            buttons: MouseButtons::LEFT,
            x: 4,
            y: -4,
            vscroll: 0,
            hscroll: 0,
        };
        assert_eq!(
            state.to_report(),
            [0x01, 0x00, 0x09, 0x01, 0x01, 0x04, 0x00, 0xFC, 0xFF, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_mouse_report_little_endian_extremes() {
        let state = MouseState {
            x: i16::MIN,
            y: i16::MAX,
            vscroll: -1,
            hscroll: 0x1234,
            ..MouseState::neutral()
        };
        let report = state.to_report();
        assert_eq!(&report[5..7], &[0x00, 0x80]);
        assert_eq!(&report[7..9], &[0xFF, 0x7F]);
        assert_eq!(&report[9..11], &[0xFF, 0xFF]);
        assert_eq!(&report[11..13], &[0x34, 0x12]);
    }

    #[test]
    fn test_gamepad_report_neutral() {
        let report = GamepadState::neutral().to_report();
        assert_eq!(report, [1, 2, 8, 0, 0, 0, 15, 128, 128, 128, 128, 0]);
    }

    #[test]
    fn test_gamepad_report_buttons_and_dpad() {
        let state = GamepadState {
            buttons: GamepadButtons::Y
                | GamepadButtons::ZR
                | GamepadButtons::MINUS
                | GamepadButtons::CAPTURE,
            dpad: Dpad {
                up: true,
                ..Dpad::NEUTRAL
            },
            lx: 0,
            ly: 255,
            rx: 1,
            ry: 254,
        };
        let report = state.to_report();
        assert_eq!(report[4], 0b1000_0001); // Y + ZR
        assert_eq!(report[5], 0b0010_0001); // minus + capture
        assert_eq!(report[6], 0); // up
        assert_eq!(&report[7..11], &[0, 255, 1, 254]);
        assert_eq!(report[11], 0);
    }

    #[test]
    fn test_serialize_matches_to_report() {
        let state = GamepadState {
            buttons: GamepadButtons::A,
            ..GamepadState::neutral()
        };
        let mut buf = [0u8; 32];
        let len = state.serialize(&mut buf).unwrap();
        assert_eq!(len, GAMEPAD_REPORT_LEN);
        assert_eq!(&buf[..len], &state.to_report());
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let state = MouseState {
            buttons: MouseButtons::LEFT | MouseButtons::MIDDLE,
            x: -300,
            y: 17,
            vscroll: 2,
            hscroll: -2,
        };
        assert_eq!(state.to_report(), state.to_report());
    }

    #[test]
    fn test_serialize_buffer_too_small() {
        let mut buf = [0u8; 12]; // one byte short for a mouse report
        assert_eq!(
            MouseState::neutral().serialize(&mut buf),
            Err(SerializeError::BufferTooSmall)
        );
        let mut buf = [0u8; 11];
        assert_eq!(
            GamepadState::neutral().serialize(&mut buf),
            Err(SerializeError::BufferTooSmall)
        );
    }
}
