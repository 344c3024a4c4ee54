//! Transport sink trait and error types.

use hid_report_proto::FrameError;

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Write/send failure on the underlying channel.
    #[error("transport I/O: {0}")]
    Io(#[from] std::io::Error),
    /// Framing failure while preparing a stream write.
    #[error("framing: {0}")]
    Frame(#[from] FrameError),
}

/// Trait for report transport sinks.
///
/// A sink puts encoded report bytes on the wire. Datagram sinks send them
/// as-is; byte-stream sinks must wrap them in a frame first, since the
/// stream has no message boundaries. That split is part of the contract:
/// the forwarder hands over raw report bytes either way.
///
/// Failures propagate as a hard failure of the current send; there is no
/// retry or reconnect at this layer.
pub trait TransportSink {
    /// Send one encoded report.
    fn send(&mut self, report: &[u8]) -> Result<(), SinkError>;
}
