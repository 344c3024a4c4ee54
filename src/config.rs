//! Command-line interface and transport selection.

use clap::{Args, Parser, Subcommand};

/// Forward local input to a remote HID receiver.
#[derive(Debug, Parser)]
#[command(name = "hid-forward", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub link: LinkArgs,

    /// Poll interval in milliseconds
    #[arg(long, default_value_t = 10)]
    pub interval_ms: u64,

    #[command(subcommand)]
    pub mode: Mode,
}

/// Where the receiver is reachable. Exactly one transport must be given.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct LinkArgs {
    /// HID receiver IP address or hostname (datagram transport)
    #[arg(long)]
    pub address: Option<String>,

    /// HID receiver serial port/device (framed stream transport)
    #[arg(long)]
    pub serial_port: Option<String>,
}

/// The resolved transport choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// UDP to the given address, raw report bytes.
    Datagram(String),
    /// Serial link on the given device, framed report bytes.
    Stream(String),
}

/// Error type for configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("either --address or --serial-port must be specified")]
    MissingTransport,
    #[error("--address and --serial-port can't be specified at the same time")]
    ConflictingTransports,
}

impl LinkArgs {
    /// Resolve the mutually exclusive transport flags into an [`Endpoint`].
    ///
    /// Clap's argument group already rejects zero or two flags at parse
    /// time; this keeps the rule explicit for programmatic construction.
    pub fn endpoint(&self) -> Result<Endpoint, ConfigError> {
        match (&self.address, &self.serial_port) {
            (Some(address), None) => Ok(Endpoint::Datagram(address.clone())),
            (None, Some(device)) => Ok(Endpoint::Stream(device.clone())),
            (None, None) => Err(ConfigError::MissingTransport),
            (Some(_), Some(_)) => Err(ConfigError::ConflictingTransports),
        }
    }
}

/// Which demo input source to run.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Mode {
    /// Sweep the mouse pointer in a small circle
    MouseWave,
    /// Cycle through every gamepad button while circling both sticks
    GamepadCycle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_address() {
        let cli = Cli::try_parse_from(["hid-forward", "--address", "10.0.0.7", "mouse-wave"])
            .unwrap();
        assert_eq!(
            cli.link.endpoint().unwrap(),
            Endpoint::Datagram("10.0.0.7".into())
        );
        assert_eq!(cli.interval_ms, 10);
    }

    #[test]
    fn test_parse_with_serial_port() {
        let cli = Cli::try_parse_from([
            "hid-forward",
            "--serial-port",
            "/dev/ttyUSB0",
            "gamepad-cycle",
        ])
        .unwrap();
        assert_eq!(
            cli.link.endpoint().unwrap(),
            Endpoint::Stream("/dev/ttyUSB0".into())
        );
    }

    #[test]
    fn test_parse_rejects_no_transport() {
        assert!(Cli::try_parse_from(["hid-forward", "mouse-wave"]).is_err());
    }

    #[test]
    fn test_parse_rejects_both_transports() {
        assert!(Cli::try_parse_from([
            "hid-forward",
            "--address",
            "10.0.0.7",
            "--serial-port",
            "/dev/ttyUSB0",
            "mouse-wave",
        ])
        .is_err());
    }

    #[test]
    fn test_endpoint_validation_direct() {
        let neither = LinkArgs {
            address: None,
            serial_port: None,
        };
        assert!(matches!(
            neither.endpoint(),
            Err(ConfigError::MissingTransport)
        ));

        let both = LinkArgs {
            address: Some("10.0.0.7".into()),
            serial_port: Some("/dev/ttyUSB0".into()),
        };
        assert!(matches!(
            both.endpoint(),
            Err(ConfigError::ConflictingTransports)
        ));
    }

    #[test]
    fn test_custom_interval() {
        let cli = Cli::try_parse_from([
            "hid-forward",
            "--address",
            "10.0.0.7",
            "--interval-ms",
            "20",
            "mouse-wave",
        ])
        .unwrap();
        assert_eq!(cli.interval_ms, 20);
    }
}
