//! Framed stream sink: escaped, checksummed reports over a serial link.

use std::io::Write;

use forward_core::{SinkError, TransportSink};
use hid_report_proto::{encode_frame, max_frame_len};
use serialport::SerialPort;

/// Fixed baud rate of the receiver's serial link.
pub const BAUD_RATE: u32 = 921_600;

/// Wraps every report in a delimited, escaped frame with a trailing CRC-32
/// before writing it to the underlying byte stream.
///
/// Generic over the writer so the framing path can be exercised against an
/// in-memory buffer; production use goes through [`open`](Self::open).
pub struct FramedStreamSink<W = Box<dyn SerialPort>> {
    writer: W,
}

impl FramedStreamSink {
    /// Open the serial device at the fixed [`BAUD_RATE`].
    pub fn open(device: &str) -> Result<Self, serialport::Error> {
        let port = serialport::new(device, BAUD_RATE).open()?;
        Ok(Self { writer: port })
    }
}

impl<W: Write> FramedStreamSink<W> {
    /// Wrap an arbitrary writer.
    pub fn from_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Access the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> TransportSink for FramedStreamSink<W> {
    fn send(&mut self, report: &[u8]) -> Result<(), SinkError> {
        let mut frame = vec![0u8; max_frame_len(report.len())];
        let len = encode_frame(report, &mut frame)?;
        self.writer.write_all(&frame[..len])?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hid_report_proto::{decode_frame, GamepadState, END, ESC, ESC_END, ESC_ESC};

    #[test]
    fn test_writes_one_frame_per_report() {
        let mut sink = FramedStreamSink::from_writer(Vec::new());

        let report = GamepadState::neutral().to_report();
        sink.send(&report).unwrap();

        let written = sink.get_ref().clone();
        assert_eq!(written.first(), Some(&END));
        assert_eq!(written.last(), Some(&END));

        let mut out = [0u8; 64];
        let len = decode_frame(&written, &mut out).unwrap();
        assert_eq!(&out[..len], &report);
    }

    #[test]
    fn test_reserved_report_bytes_are_escaped() {
        let mut sink = FramedStreamSink::from_writer(Vec::new());

        // A payload made of nothing but delimiter and escape bytes.
        sink.send(&[END, ESC, END, ESC]).unwrap();

        // Between the delimiters: no bare END, and every ESC starts a
        // two-byte escape pair.
        let written = sink.get_ref();
        let mut iter = written[1..written.len() - 1].iter();
        while let Some(&b) = iter.next() {
            assert_ne!(b, END);
            if b == ESC {
                let next = iter.next().copied();
                assert!(next == Some(ESC_END) || next == Some(ESC_ESC));
            }
        }
    }

    #[test]
    fn test_consecutive_reports_are_separate_frames() {
        let mut sink = FramedStreamSink::from_writer(Vec::new());

        let a = GamepadState::neutral().to_report();
        let b = GamepadState {
            lx: 0,
            ..GamepadState::neutral()
        }
        .to_report();
        sink.send(&a).unwrap();
        sink.send(&b).unwrap();

        let written = sink.get_ref();
        // Split the stream at frame boundaries and decode each.
        let mut decoder = hid_report_proto::FrameDecoder::<64>::new();
        let mut decoded = Vec::new();
        for &byte in written.iter() {
            if let Some(result) = decoder.push(byte) {
                decoded.push(result.unwrap().to_vec());
            }
        }
        assert_eq!(decoded, vec![a.to_vec(), b.to_vec()]);
    }
}
