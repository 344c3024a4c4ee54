//! Transport-agnostic input forwarding for the remote HID bridge.
//!
//! This crate connects an input source to a transport sink without knowing
//! anything about either end:
//!
//! - [`source`]: Input source trait ([`InputSource`])
//! - [`sink`]: Transport sink trait ([`TransportSink`])
//! - [`forward`]: Orchestrates the poll-encode-send loop ([`Forwarder`])
//!
//! An input source yields device state snapshots ([`MouseState`] or
//! [`GamepadState`] from `hid-report-proto`); the forwarder encodes each
//! snapshot into its fixed report bytes and hands them to the sink. Whether
//! those bytes go out as a raw datagram or get framed for a serial link is
//! the sink's concern.
//!
//! # Example
//!
//! ```
//! use forward_core::{Forwarder, InputError, InputSource, SinkError, TransportSink};
//! use hid_report_proto::MouseState;
//!
//! struct Nudge;
//!
//! impl InputSource for Nudge {
//!     type State = MouseState;
//!     fn poll(&mut self) -> Result<MouseState, InputError> {
//!         Ok(MouseState { x: 1, ..MouseState::neutral() })
//!     }
//! }
//!
//! struct Collect(Vec<Vec<u8>>);
//!
//! impl TransportSink for Collect {
//!     fn send(&mut self, report: &[u8]) -> Result<(), SinkError> {
//!         self.0.push(report.to_vec());
//!         Ok(())
//!     }
//! }
//!
//! let mut forwarder = Forwarder::new(Nudge, Collect(Vec::new()));
//! assert!(forwarder.tick().unwrap());
//! ```
//!
//! [`MouseState`]: hid_report_proto::MouseState
//! [`GamepadState`]: hid_report_proto::GamepadState

pub mod forward;
pub mod sink;
pub mod source;

// Re-export main types at crate root
pub use forward::{ForwardError, Forwarder};
pub use sink::{SinkError, TransportSink};
pub use source::{InputError, InputSource};
