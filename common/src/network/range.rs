//! # IPv4 Range Expressions
//!
//! Parses and validates expressions like `192.0.2.1-192.0.2.10`.
//!
//! An expression must hold exactly two addresses separated by a single `-`.
//! Both must be valid dotted quads and the first must be strictly lower than
//! the second when compared as unsigned 32-bit integers.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use tracing::debug;

use crate::error::RangeError;
use crate::network::address::parse_ipv4;

pub const DELIMITER: char = '-';

/// A continuous, non-empty range of IPv4 addresses with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    start_addr: Ipv4Addr,
    end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Result<Self, RangeError> {
        if !is_ordered(start_addr, end_addr) {
            return Err(RangeError::UnorderedRange {
                first: start_addr,
                second: end_addr,
            });
        }

        Ok(Self {
            start_addr,
            end_addr,
        })
    }

    pub fn start_addr(&self) -> Ipv4Addr {
        self.start_addr
    }

    pub fn end_addr(&self) -> Ipv4Addr {
        self.end_addr
    }

    /// Number of addresses covered, both bounds included.
    pub fn len(&self) -> u64 {
        let start: u64 = u32::from(self.start_addr).into();
        let end: u64 = u32::from(self.end_addr).into();
        end - start + 1
    }

    // A valid range always holds at least two addresses.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.start_addr <= addr && addr <= self.end_addr
    }
}

impl fmt::Display for Ipv4Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.start_addr, self.end_addr)
    }
}

impl FromStr for Ipv4Range {
    type Err = RangeError;

    /// Parses `first-second`, failing with
    /// [`RangeError::UnorderedRange`] when `first >= second`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = parse_bounds(s)?;
        Ipv4Range::new(first, second)
    }
}

/// Checks a range expression.
///
/// Returns `Ok(true)` when both addresses parse and the first is lower than
/// the second, `Ok(false)` when they parse but are equal or reversed, and an
/// error when the expression itself is malformed.
pub fn validate_range(expr: &str) -> Result<bool, RangeError> {
    let (first, second) = parse_bounds(expr)?;
    Ok(is_ordered(first, second))
}

fn is_ordered(first: Ipv4Addr, second: Ipv4Addr) -> bool {
    u32::from(first) < u32::from(second)
}

/// Splits an expression into its two addresses.
///
/// More than one delimiter is rejected rather than ignoring the trailing
/// tokens.
fn parse_bounds(expr: &str) -> Result<(Ipv4Addr, Ipv4Addr), RangeError> {
    let malformed = |reason| RangeError::MalformedExpression {
        expr: expr.to_string(),
        reason,
    };

    if !expr.contains(DELIMITER) {
        return Err(malformed("missing '-' delimiter"));
    }

    let tokens: Vec<&str> = expr.split(DELIMITER).collect();
    let [first_str, second_str] = tokens.as_slice() else {
        return Err(malformed("expected exactly two addresses"));
    };

    if first_str.is_empty() || second_str.is_empty() {
        return Err(malformed("address on each side of '-' is required"));
    }

    let first = parse_ipv4(first_str)?;
    let second = parse_ipv4(second_str)?;
    debug!("split '{expr}' into {first} and {second}");

    Ok((first, second))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
