//! Wire formats for the remote HID bridge: device reports and serial framing.
//!
//! This crate provides everything needed to produce the byte streams the HID
//! receiver understands:
//!
//! - **Types**: Snapshot structures for the supported devices
//!   - [`MouseState`] - Mouse buttons, movement deltas, and scroll wheels
//!   - [`GamepadState`] - Gamepad buttons, dpad, and analog sticks
//!   - [`MouseButtons`] / [`GamepadButtons`] - Button state bitfields
//!   - [`Dpad`] - Directional pad state with hat-switch encoding
//!
//! - **Reports**: Fixed-layout binary report encoding
//!   - [`Serialize`] trait - Encode a snapshot to its report bytes
//!
//! - **Framing**: Delimiter-and-escape framing for byte-stream transports
//!   - [`encode_frame`] / [`decode_frame`] - One frame at a time
//!   - [`FrameDecoder`] - Incremental decoder for receivers
//!
//! # Report Format
//!
//! Every report starts with the same four header bytes, followed by a
//! device-specific body. All multi-byte fields are little-endian.
//!
//! ```text
//! version(=1) descriptor length report_id <body>
//! ```
//!
//! ## Mouse (13 bytes, descriptor 0, report id 1)
//!
//! ```text
//! 01 00 09 01 <buttons:u8> <x:i16> <y:i16> <vscroll:i16> <hscroll:i16>
//! ```
//!
//! ## Gamepad (12 bytes, descriptor 2, report id 0)
//!
//! ```text
//! 01 02 08 00 <buttons1:u8> <buttons2:u8> <dpad:u8> <lx:u8> <ly:u8> <rx:u8> <ry:u8> 00
//! ```
//!
//! Gamepad axes are unsigned bytes centered at 128; the dpad byte is a
//! hat-switch code derived from the four direction flags (see [`Dpad::code`]).
//!
//! # Frame Format
//!
//! Byte-stream transports (serial links) have no message boundaries, so reports
//! are wrapped in a SLIP-style frame with a trailing CRC-32:
//!
//! ```text
//! END escaped(payload) escaped(crc32_le(payload)) END
//! ```
//!
//! where `END = 0xC0`, and any `END`/`ESC` byte inside the payload or checksum
//! is replaced by the two-byte sequences `ESC ESC_END` / `ESC ESC_ESC`
//! (`ESC = 0xDB`, `ESC_END = 0xDC`, `ESC_ESC = 0xDD`). The checksum is computed
//! over the raw payload, before escaping. Datagram transports send the report
//! bytes unframed.
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host use and testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//! - **`heapless`**: Enable `serialize_to_vec()` / `encode_frame_to_vec()`
//! - **`embedded-io`**: Enable `serialize_io()` for I/O peripherals
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations, so the
//! same code can run in a microcontroller receiver.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod crc;
pub mod frame;
pub mod serialize;
pub mod types;

// Re-export types at crate root for convenience
pub use crc::{calculate_crc32, Crc32Digest};
pub use frame::{
    decode_frame, encode_frame, max_frame_len, FrameDecoder, FrameError, CRC_LEN, END, ESC,
    ESC_END, ESC_ESC,
};
pub use serialize::{
    Serialize, SerializeError, GAMEPAD_REPORT_LEN, MAX_REPORT_LEN, MOUSE_REPORT_LEN,
    PROTOCOL_VERSION,
};
pub use types::{
    clamp_axis, Dpad, GamepadButtons, GamepadState, MouseButtons, MouseState, AXIS_CENTER,
    AXIS_MAX, AXIS_MIN,
};
