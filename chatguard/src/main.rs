// chatguard/src/main.rs
//! chatguard entry point.

use chatguard::cli::Cli;
use chatguard::logger;
use chatguard::ui::output_format;
use clap::Parser;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    match chatguard::run(args) {
        Ok(code) => code,
        Err(e) => {
            let supports_color = io::stderr().is_terminal();
            let _ = output_format::print_error_message(&mut io::stderr(), &format!("{:#}", e), supports_color);
            ExitCode::from(2)
        }
    }
}
