mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, check};
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = match CommandLine::try_parse_args() {
        Ok(commands) => commands,
        Err(e) => return argument_error(e),
    };

    let cfg = commands.config();
    logging::init_logging(&cfg);

    match check::check(&commands.expression, &cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            print::failure(&e);
            ExitCode::FAILURE
        }
    }
}

/// Help and version requests succeed; any other argument problem exits
/// with status 1 rather than clap's default of 2.
fn argument_error(e: clap::Error) -> ExitCode {
    let _ = e.print();
    if e.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
