//! Transport sinks: raw UDP datagrams or a framed serial stream.
//!
//! Exactly one sink is active per run. Datagram sinks send unframed report
//! bytes; stream sinks wrap every report in a delimited, checksummed frame
//! because a byte stream has no message boundaries. Both are fire-and-forget:
//! a write failure is fatal to the current send, never retried here.

pub mod serial;
pub mod udp;

pub use serial::{FramedStreamSink, BAUD_RATE};
pub use udp::{DatagramSink, RECEIVER_PORT};

use forward_core::{SinkError, TransportSink};

use crate::config::Endpoint;

/// Error type for opening a transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("udp: {0}")]
    Io(#[from] std::io::Error),
    #[error("serial: {0}")]
    Serial(#[from] serialport::Error),
}

/// The active transport, one of the two sink kinds.
pub enum Transport {
    Datagram(DatagramSink),
    Stream(FramedStreamSink),
}

impl Transport {
    /// Open the transport named by the endpoint.
    pub fn open(endpoint: &Endpoint) -> Result<Self, TransportError> {
        match endpoint {
            Endpoint::Datagram(address) => Ok(Self::Datagram(DatagramSink::new(address)?)),
            Endpoint::Stream(device) => Ok(Self::Stream(FramedStreamSink::open(device)?)),
        }
    }
}

impl TransportSink for Transport {
    fn send(&mut self, report: &[u8]) -> Result<(), SinkError> {
        match self {
            Self::Datagram(sink) => sink.send(report),
            Self::Stream(sink) => sink.send(report),
        }
    }
}
