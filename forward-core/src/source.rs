//! Input source trait and error types.

use hid_report_proto::Serialize;

/// Error type for input operations.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input device went away (controller unplugged, window closed).
    #[error("input device disconnected")]
    Disconnected,
    /// I/O failure while polling the device.
    #[error("input I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for device input sources.
///
/// An input source periodically yields a snapshot of the device's current
/// state; how that state is acquired (event pump, evdev, synthetic pattern)
/// is the implementation's business. The forwarder polls once per tick.
pub trait InputSource {
    /// The device snapshot this source produces.
    type State: Serialize;

    /// Produce the current device state.
    fn poll(&mut self) -> Result<Self::State, InputError>;
}
