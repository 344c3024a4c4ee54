//! Unreliable-datagram sink: raw report bytes over UDP.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use forward_core::{SinkError, TransportSink};

/// Fixed port the HID receiver listens on.
pub const RECEIVER_PORT: u16 = 42734;

/// Sends unframed report bytes to the receiver, one datagram per report.
///
/// Datagrams carry their own boundaries, so no framing or checksum is
/// added; a lost or reordered report is simply superseded by the next one.
pub struct DatagramSink {
    socket: UdpSocket,
    dest: SocketAddr,
}

impl DatagramSink {
    /// Resolve the receiver address and bind a local socket.
    ///
    /// `address` may be an IP address or a hostname; the port is fixed at
    /// [`RECEIVER_PORT`].
    pub fn new(address: &str) -> io::Result<Self> {
        let dest = (address, RECEIVER_PORT)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no address found for {address}"),
                )
            })?;
        Self::to(dest)
    }

    /// Bind a local socket for the given destination.
    pub fn to(dest: SocketAddr) -> io::Result<Self> {
        let bind_addr = if dest.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        Ok(Self {
            socket: UdpSocket::bind(bind_addr)?,
            dest,
        })
    }

    /// The resolved destination address.
    #[must_use]
    pub fn dest(&self) -> SocketAddr {
        self.dest
    }
}

impl TransportSink for DatagramSink {
    fn send(&mut self, report: &[u8]) -> Result<(), SinkError> {
        self.socket.send_to(report, self.dest)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hid_report_proto::MouseState;

    #[test]
    fn test_sends_raw_report_datagram() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut sink = DatagramSink::to(receiver.local_addr().unwrap()).unwrap();

        let report = MouseState {
            x: 4,
            y: -4,
            ..MouseState::neutral()
        }
        .to_report();
        sink.send(&report).unwrap();

        let mut buf = [0u8; 64];
        let (len, _) = receiver.recv_from(&mut buf).unwrap();
        // Raw report bytes, no framing.
        assert_eq!(&buf[..len], &report);
    }
}
