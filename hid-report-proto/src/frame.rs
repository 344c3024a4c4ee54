//! SLIP-style framing with a trailing CRC-32.
//!
//! Byte-stream transports carry no message boundaries, so each report is
//! wrapped in a delimiter-and-escape frame:
//!
//! ```text
//! END escaped(payload) escaped(crc32_le(payload)) END
//! ```
//!
//! The checksum is computed over the raw payload before escaping. Inside the
//! frame, literal `END` bytes become `ESC ESC_END` and literal `ESC` bytes
//! become `ESC ESC_ESC`, so the delimiter can never appear in the body.
//!
//! Encoding is total: any payload (including an empty one, or one made
//! entirely of reserved bytes) produces a valid frame. On decode, a checksum
//! mismatch or malformed escape is a drop-this-frame condition, never fatal
//! to the channel.
//!
//! # Example
//!
//! ```
//! use hid_report_proto::{encode_frame, decode_frame, max_frame_len, END};
//!
//! let payload = [0xC0, 0x01, 0xDB];
//! let mut frame = [0u8; max_frame_len(3)];
//! let n = encode_frame(&payload, &mut frame).unwrap();
//! assert_eq!(frame[0], END);
//! assert_eq!(frame[n - 1], END);
//!
//! let mut out = [0u8; 16];
//! let len = decode_frame(&frame[..n], &mut out).unwrap();
//! assert_eq!(&out[..len], &payload);
//! ```

use crate::crc::{calculate_crc32, Crc32Digest};

/// Frame delimiter, sent at both ends of a frame.
pub const END: u8 = 0xC0;
/// Escape introducer for reserved bytes inside a frame.
pub const ESC: u8 = 0xDB;
/// `ESC ESC_END` stands for a literal `END` data byte.
pub const ESC_END: u8 = 0xDC;
/// `ESC ESC_ESC` stands for a literal `ESC` data byte.
pub const ESC_ESC: u8 = 0xDD;

/// Size of the checksum appended to every frame.
pub const CRC_LEN: usize = 4;

/// Worst-case encoded size of a frame for the given payload length.
///
/// Every payload and checksum byte may expand to two bytes, plus the two
/// delimiters.
#[inline]
#[must_use]
pub const fn max_frame_len(payload_len: usize) -> usize {
    2 * (payload_len + CRC_LEN) + 2
}

/// Error type for frame operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// The output buffer is too small for the worst-case frame size.
    BufferTooSmall,
    /// The input does not start and end with `END` delimiters.
    MissingDelimiter,
    /// An `ESC` byte was followed by something other than `ESC_END`/`ESC_ESC`.
    InvalidEscape,
    /// The frame ended mid-escape or is shorter than the checksum.
    Truncated,
    /// The trailing CRC-32 does not match the recovered payload.
    Checksum,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "buffer too small"),
            Self::MissingDelimiter => write!(f, "missing frame delimiter"),
            Self::InvalidEscape => write!(f, "invalid escape sequence"),
            Self::Truncated => write!(f, "truncated frame"),
            Self::Checksum => write!(f, "checksum mismatch"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

/// Helper for appending delimiter/escaped bytes to an output buffer.
struct FrameBuf<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> FrameBuf<'a> {
    #[inline]
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Write a byte without escaping (for the frame delimiters).
    #[inline]
    fn put_raw(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
    }

    /// Write a data byte, escaping reserved values.
    #[inline]
    fn put_escaped(&mut self, byte: u8) {
        match byte {
            END => {
                self.put_raw(ESC);
                self.put_raw(ESC_END);
            }
            ESC => {
                self.put_raw(ESC);
                self.put_raw(ESC_ESC);
            }
            _ => self.put_raw(byte),
        }
    }
}

/// Encode a payload into a delimited, escaped, checksummed frame.
///
/// Returns the number of bytes written. The function is total over all
/// payloads; the only failure mode is an undersized output buffer, which is
/// checked against [`max_frame_len`] up front.
///
/// # Errors
///
/// Returns [`FrameError::BufferTooSmall`] if `buf` is shorter than
/// `max_frame_len(payload.len())`.
pub fn encode_frame(payload: &[u8], buf: &mut [u8]) -> Result<usize, FrameError> {
    if buf.len() < max_frame_len(payload.len()) {
        return Err(FrameError::BufferTooSmall);
    }

    let mut fb = FrameBuf::new(buf);
    let mut crc = Crc32Digest::new();

    fb.put_raw(END);
    for &b in payload {
        crc.update(b);
        fb.put_escaped(b);
    }
    // Checksum of the raw payload, escaped byte-by-byte like the data.
    for b in crc.finalize().to_le_bytes() {
        fb.put_escaped(b);
    }
    fb.put_raw(END);

    Ok(fb.pos)
}

/// Encode a payload into a framed `heapless::Vec`.
///
/// # Errors
///
/// Returns [`FrameError::BufferTooSmall`] if `N` is not large enough.
#[cfg(feature = "heapless")]
pub fn encode_frame_to_vec<const N: usize>(
    payload: &[u8],
) -> Result<heapless::Vec<u8, N>, FrameError> {
    let mut vec = heapless::Vec::new();
    vec.resize(N, 0).map_err(|_| FrameError::BufferTooSmall)?;
    let len = encode_frame(payload, &mut vec)?;
    vec.truncate(len);
    Ok(vec)
}

/// Decode a single complete frame, verifying the trailing CRC-32.
///
/// `frame` must start and end with `END`; the recovered payload is written
/// to `out` and its length returned. This is the receiver-side inverse of
/// [`encode_frame`]; for a byte-at-a-time stream use [`FrameDecoder`].
///
/// # Errors
///
/// - [`FrameError::MissingDelimiter`] if the delimiters are absent, or a
///   bare `END` appears inside the body (a frame boundary mid-frame).
/// - [`FrameError::InvalidEscape`] / [`FrameError::Truncated`] on malformed
///   escape sequences or a body shorter than the checksum.
/// - [`FrameError::Checksum`] if the recovered CRC-32 does not match.
/// - [`FrameError::BufferTooSmall`] if `out` cannot hold the body.
pub fn decode_frame(frame: &[u8], out: &mut [u8]) -> Result<usize, FrameError> {
    let (&first, rest) = frame.split_first().ok_or(FrameError::MissingDelimiter)?;
    let (&last, body) = rest.split_last().ok_or(FrameError::MissingDelimiter)?;
    if first != END || last != END {
        return Err(FrameError::MissingDelimiter);
    }
    // Unescaping never grows the data.
    if out.len() < body.len() {
        return Err(FrameError::BufferTooSmall);
    }

    let mut len = 0;
    let mut esc = false;
    for &b in body {
        if esc {
            esc = false;
            out[len] = match b {
                ESC_END => END,
                ESC_ESC => ESC,
                _ => return Err(FrameError::InvalidEscape),
            };
            len += 1;
        } else {
            match b {
                ESC => esc = true,
                END => return Err(FrameError::MissingDelimiter),
                _ => {
                    out[len] = b;
                    len += 1;
                }
            }
        }
    }
    if esc || len < CRC_LEN {
        return Err(FrameError::Truncated);
    }

    let payload_len = len - CRC_LEN;
    let mut crc_bytes = [0u8; CRC_LEN];
    crc_bytes.copy_from_slice(&out[payload_len..len]);
    if calculate_crc32(&out[..payload_len]) != u32::from_le_bytes(crc_bytes) {
        return Err(FrameError::Checksum);
    }

    Ok(payload_len)
}

/// Incremental frame decoder for stream receivers.
///
/// Feed bytes as they arrive with [`push`](Self::push); a complete frame is
/// unescaped and checksum-verified at its closing delimiter. Back-to-back
/// `END` bytes between frames (idle delimiters) are skipped silently, so a
/// sender may lead every frame with its own `END`. A bad frame yields one
/// error and the decoder resynchronizes at the next delimiter.
///
/// `N` bounds the unescaped payload-plus-checksum size of a single frame.
///
/// # Example
///
/// ```
/// use hid_report_proto::{encode_frame, FrameDecoder};
///
/// let mut frame = [0u8; 32];
/// let n = encode_frame(&[1, 2, 3], &mut frame).unwrap();
///
/// let mut decoder = FrameDecoder::<64>::new();
/// let mut last = None;
/// for &b in &frame[..n] {
///     if let Some(result) = decoder.push(b) {
///         last = Some(result.unwrap().to_vec());
///     }
/// }
/// assert_eq!(last.unwrap(), vec![1, 2, 3]);
/// ```
pub struct FrameDecoder<const N: usize> {
    buf: [u8; N],
    len: usize,
    esc: bool,
    overflow: bool,
    invalid: bool,
    pending_reset: bool,
}

impl<const N: usize> FrameDecoder<N> {
    /// Create an empty decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            esc: false,
            overflow: false,
            invalid: false,
            pending_reset: false,
        }
    }

    /// Feed one byte; returns the payload when a frame completes.
    ///
    /// The returned slice is valid until the next call to `push`.
    pub fn push(&mut self, byte: u8) -> Option<Result<&[u8], FrameError>> {
        if self.pending_reset {
            self.len = 0;
            self.pending_reset = false;
        }
        if byte == END {
            return self.finish();
        }
        if self.esc {
            self.esc = false;
            match byte {
                ESC_END => self.accept(END),
                ESC_ESC => self.accept(ESC),
                _ => self.invalid = true,
            }
        } else if byte == ESC {
            self.esc = true;
        } else {
            self.accept(byte);
        }
        None
    }

    #[inline]
    fn accept(&mut self, byte: u8) {
        if self.len < N {
            self.buf[self.len] = byte;
            self.len += 1;
        } else {
            self.overflow = true;
        }
    }

    /// Close the current frame at an `END` delimiter.
    fn finish(&mut self) -> Option<Result<&[u8], FrameError>> {
        let esc = core::mem::take(&mut self.esc);
        let overflow = core::mem::take(&mut self.overflow);
        let invalid = core::mem::take(&mut self.invalid);

        // Idle delimiter between frames, nothing accumulated.
        if self.len == 0 && !esc && !overflow && !invalid {
            return None;
        }
        self.pending_reset = true;

        if overflow {
            return Some(Err(FrameError::BufferTooSmall));
        }
        if invalid {
            return Some(Err(FrameError::InvalidEscape));
        }
        if esc || self.len < CRC_LEN {
            return Some(Err(FrameError::Truncated));
        }

        let payload_len = self.len - CRC_LEN;
        let mut crc_bytes = [0u8; CRC_LEN];
        crc_bytes.copy_from_slice(&self.buf[payload_len..self.len]);
        if calculate_crc32(&self.buf[..payload_len]) != u32::from_le_bytes(crc_bytes) {
            return Some(Err(FrameError::Checksum));
        }

        Some(Ok(&self.buf[..payload_len]))
    }
}

impl<const N: usize> Default for FrameDecoder<N> {
    fn default() -> Self {
        Self::new()
    }
}
