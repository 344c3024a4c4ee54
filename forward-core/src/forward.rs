//! Forwarder: drives the poll-encode-send loop.

use std::thread;
use std::time::{Duration, Instant};

use hid_report_proto::{Serialize, SerializeError};
use tracing::{trace, warn};

use crate::sink::{SinkError, TransportSink};
use crate::source::{InputError, InputSource};

/// Error type for forwarding operations.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// Error from the input source.
    #[error("input: {0}")]
    Input(#[from] InputError),
    /// Error from the transport sink.
    #[error("sink: {0}")]
    Sink(#[from] SinkError),
    /// Error encoding the report.
    #[error("encode: {0}")]
    Encode(#[from] SerializeError),
}

/// Forwards device state from an input source to a transport sink.
///
/// Each tick polls the source, encodes the snapshot into its report bytes,
/// and sends them. With dedup enabled (the default) a report identical to
/// the previously sent one is suppressed to avoid needless wire traffic;
/// the protocol is stateful on the receiver side, so skipping an unchanged
/// report is always safe.
///
/// # Error Handling
///
/// Transport failures are fatal to the tick and, in [`run`](Self::run),
/// to the loop; input failures are logged and the tick is skipped.
pub struct Forwarder<I, S> {
    input: I,
    sink: S,
    dedup: bool,
    last_sent: Option<Vec<u8>>,
}

impl<I: InputSource, S: TransportSink> Forwarder<I, S> {
    /// Create a new forwarder with unchanged-report suppression enabled.
    pub fn new(input: I, sink: S) -> Self {
        Self {
            input,
            sink,
            dedup: true,
            last_sent: None,
        }
    }

    /// Enable or disable unchanged-report suppression.
    #[must_use]
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Poll the source once and forward the report.
    ///
    /// Returns `Ok(true)` if a report was sent, `Ok(false)` if it was
    /// suppressed as unchanged.
    pub fn tick(&mut self) -> Result<bool, ForwardError> {
        let state = self.input.poll()?;

        let mut report = vec![0u8; <I::State as Serialize>::MAX_LEN];
        let len = state.serialize(&mut report)?;
        report.truncate(len);

        if self.dedup && self.last_sent.as_deref() == Some(&report[..]) {
            return Ok(false);
        }

        self.sink.send(&report)?;
        trace!(len = report.len(), "sent report");
        self.last_sent = Some(report);
        Ok(true)
    }

    /// Run the forwarding loop at a fixed tick interval.
    ///
    /// Polls and sends once per interval until the transport fails or the
    /// encoder reports an error. Input errors are logged and skipped; the
    /// source may have a device reappear on a later tick.
    pub fn run(&mut self, interval: Duration) -> Result<std::convert::Infallible, ForwardError> {
        loop {
            let started = Instant::now();
            match self.tick() {
                Ok(_) => {}
                Err(ForwardError::Input(e)) => warn!(error = %e, "input poll failed"),
                Err(e) => return Err(e),
            }
            if let Some(remaining) = interval.checked_sub(started.elapsed()) {
                thread::sleep(remaining);
            }
        }
    }

    /// Get a reference to the input source.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Get a reference to the transport sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Decompose the forwarder into its input and sink components.
    pub fn into_parts(self) -> (I, S) {
        (self.input, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hid_report_proto::{GamepadButtons, GamepadState, MouseState};

    struct ScriptedInput<T> {
        states: Vec<T>,
        index: usize,
    }

    impl<T> ScriptedInput<T> {
        fn new(states: Vec<T>) -> Self {
            Self { states, index: 0 }
        }
    }

    impl<T: Serialize + Copy> InputSource for ScriptedInput<T> {
        type State = T;

        fn poll(&mut self) -> Result<T, InputError> {
            let result = self
                .states
                .get(self.index)
                .copied()
                .ok_or(InputError::Disconnected);
            self.index += 1;
            result
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        sent: Vec<Vec<u8>>,
    }

    impl TransportSink for RecordingSink {
        fn send(&mut self, report: &[u8]) -> Result<(), SinkError> {
            self.sent.push(report.to_vec());
            Ok(())
        }
    }

    struct FailingSink;

    impl TransportSink for FailingSink {
        fn send(&mut self, _report: &[u8]) -> Result<(), SinkError> {
            Err(SinkError::Io(std::io::Error::from(
                std::io::ErrorKind::BrokenPipe,
            )))
        }
    }

    #[test]
    fn test_forwards_report_bytes() {
        let state = MouseState {
            x: 4,
            y: -4,
            ..MouseState::neutral()
        };
        let input = ScriptedInput::new(vec![state]);
        let mut forwarder = Forwarder::new(input, RecordingSink::default());

        assert!(forwarder.tick().unwrap());
        assert_eq!(forwarder.sink().sent, vec![state.to_report().to_vec()]);
    }

    #[test]
    fn test_suppresses_unchanged_report() {
        let state = GamepadState {
            buttons: GamepadButtons::A,
            ..GamepadState::neutral()
        };
        let changed = GamepadState {
            buttons: GamepadButtons::B,
            ..GamepadState::neutral()
        };
        let input = ScriptedInput::new(vec![state, state, changed]);
        let mut forwarder = Forwarder::new(input, RecordingSink::default());

        assert!(forwarder.tick().unwrap());
        assert!(!forwarder.tick().unwrap());
        assert!(forwarder.tick().unwrap());
        assert_eq!(forwarder.sink().sent.len(), 2);
    }

    #[test]
    fn test_dedup_disabled_sends_every_tick() {
        let state = GamepadState::neutral();
        let input = ScriptedInput::new(vec![state, state]);
        let mut forwarder = Forwarder::new(input, RecordingSink::default()).with_dedup(false);

        assert!(forwarder.tick().unwrap());
        assert!(forwarder.tick().unwrap());
        assert_eq!(forwarder.sink().sent.len(), 2);
    }

    #[test]
    fn test_sink_error_propagates() {
        let input = ScriptedInput::new(vec![MouseState::neutral()]);
        let mut forwarder = Forwarder::new(input, FailingSink);

        assert!(matches!(forwarder.tick(), Err(ForwardError::Sink(_))));
    }

    #[test]
    fn test_input_error_propagates_from_tick() {
        let input: ScriptedInput<MouseState> = ScriptedInput::new(vec![]);
        let mut forwarder = Forwarder::new(input, RecordingSink::default());

        assert!(matches!(forwarder.tick(), Err(ForwardError::Input(_))));
        // Nothing was sent.
        assert!(forwarder.sink().sent.is_empty());
    }
}
