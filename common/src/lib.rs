//! # iprange-common
//!
//! Validation core shared by the `ipv4-range` binary and the integration tests.
//!
//! * **[`network`]**: parsing of IPv4 addresses and `first-second` range expressions.
//! * **[`error`]**: the error taxonomy returned by every parser.
//! * **[`config`]**: run options handed from the CLI to the rest of the program.

pub mod config;
pub mod error;
pub mod network;
