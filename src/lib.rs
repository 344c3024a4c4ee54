//! Forward local mouse and gamepad input to a remote HID receiver.
//!
//! The receiver accepts fixed-layout device reports over one of two
//! transports, chosen at startup and mutually exclusive:
//!
//! - **Datagram** (`--address`): raw report bytes over UDP to port 42734.
//! - **Stream** (`--serial-port`): reports wrapped in a delimited, escaped,
//!   CRC-32-checksummed frame over a serial link at 921 600 baud.
//!
//! The crate is organized into:
//!
//! - [`config`]: Command-line interface and transport selection
//! - [`transport`]: The two sink implementations behind one [`Transport`] enum
//! - [`source`]: Synthetic demo input sources for exercising a receiver

pub mod config;
pub mod source;
pub mod transport;

pub use config::{Cli, ConfigError, Endpoint, LinkArgs, Mode};
pub use source::{GamepadCycle, MouseWave};
pub use transport::{
    DatagramSink, FramedStreamSink, Transport, TransportError, BAUD_RATE, RECEIVER_PORT,
};
