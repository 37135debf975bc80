use std::net::Ipv4Addr;

use thiserror::Error;

/// Every way a range expression can be rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("malformed range expression '{expr}': {reason}")]
    MalformedExpression { expr: String, reason: &'static str },

    #[error("invalid IPv4 address '{token}': {reason}")]
    InvalidAddress { token: String, reason: String },

    #[error("{first} is not lower than {second}")]
    UnorderedRange { first: Ipv4Addr, second: Ipv4Addr },
}

impl RangeError {
    /// True for errors raised while parsing, as opposed to a well-formed
    /// range whose bounds are in the wrong order.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, RangeError::UnorderedRange { .. })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
