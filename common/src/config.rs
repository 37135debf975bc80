/// Run options collected from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Suppresses everything except failure diagnostics.
    pub quiet: u8,
    /// Raises the log level, once for debug and twice for trace.
    pub verbose: u8,
    /// Disables ANSI colors in diagnostics.
    pub no_color: bool,
}

impl Config {
    /// Level directive for the log filter.
    ///
    /// Quiet wins over verbose so scripts always get the bare minimum.
    pub fn log_level(&self) -> &'static str {
        if self.quiet > 0 {
            return "error";
        }

        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
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
