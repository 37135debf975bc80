use anyhow::Context;
use tracing::{debug, info_span};

use crate::terminal::print;
use iprange_common::config::Config;
use iprange_common::network::range::Ipv4Range;

/// Validates `expression` and reports the outcome.
///
/// Any error, an unordered range included, is returned so the caller can
/// turn it into a failing exit status.
pub fn check(expression: &str, cfg: &Config) -> anyhow::Result<Ipv4Range> {
    let span = info_span!("check", expression);
    let _guard = span.enter();

    debug!("validating range expression");
    let range: Ipv4Range = expression
        .parse()
        .with_context(|| format!("'{expression}' is not a valid IPv4 range"))?;

    print::accepted(&range, cfg);
    Ok(range)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
