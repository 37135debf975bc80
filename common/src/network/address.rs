//! # IPv4 Address Parsing
//!
//! Strict dotted-quad parsing: four decimal octets in `0..=255`, no leading
//! zeros, no surrounding whitespace. Anything else is an
//! [`RangeError::InvalidAddress`], never a fallback value.

use std::net::{Ipv4Addr, Ipv6Addr};

use tracing::debug;

use crate::error::RangeError;

/// Parses a single dotted-quad token.
///
/// The numeric value of the result (`u32::from(addr)`) is
/// `o0 * 2^24 + o1 * 2^16 + o2 * 2^8 + o3`.
pub fn parse_ipv4(token: &str) -> Result<Ipv4Addr, RangeError> {
    match token.parse::<Ipv4Addr>() {
        Ok(addr) => {
            debug!("parsed '{token}' as {addr} ({})", u32::from(addr));
            Ok(addr)
        }
        Err(e) => Err(RangeError::InvalidAddress {
            token: token.to_string(),
            reason: rejection_reason(token, e.to_string()),
        }),
    }
}

/// Normalized textual form of an address value.
pub fn to_dotted_quad(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// Gives a more useful reason than the stock parser message for tokens that
/// are valid in some other notation.
fn rejection_reason(token: &str, fallback: String) -> String {
    if token.parse::<Ipv6Addr>().is_ok() {
        return "IPv6 addresses are not supported".to_string();
    }
    if token.contains('/') {
        return "CIDR notation is not supported".to_string();
    }
    if token.trim() != token {
        return "surrounding whitespace is not allowed".to_string();
    }

    fallback
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
