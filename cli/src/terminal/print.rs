use colored::*;
use tracing::{error, info};

use crate::terminal::colors;
use iprange_common::config::Config;
use iprange_common::network::range::Ipv4Range;

pub fn accepted(range: &Ipv4Range, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let start: ColoredString = range.start_addr().to_string().color(colors::IPV4_ADDR);
    let end: ColoredString = range.end_addr().to_string().color(colors::IPV4_ADDR);
    let count: ColoredString = range.len().to_string().color(colors::ACCENT).bold();
    let to: ColoredString = "to".color(colors::TEXT_DEFAULT);

    info!(
        "{} {start} {to} {end} ({count} addresses)",
        "Valid range:".color(colors::PRIMARY)
    );
}

/// Failures are always reported, whatever the quiet level.
pub fn failure(err: &anyhow::Error) {
    error!("{err:#}");
}
