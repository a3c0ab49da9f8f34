use std::io::{self, Write};

use anyhow::Context;

mod commands;
mod terminal;

use commands::{CommandLine, connect};
use terminal::{logging, print};

fn main() {
    let code: i32 = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[-] {err:#}");
            1
        }
    };
    std::process::exit(code);
}

/// Everything that owns resources lives in here, so it is dropped before the process exits.
fn run() -> anyhow::Result<i32> {
    let commands = CommandLine::parse_args();
    logging::init(commands.verbose)?;

    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);
    print::header("locating wireless adapter", cfg.quiet);

    let code: i32 = connect::connect(&cfg, commands.presets());

    print::end_of_program(cfg.quiet);
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(code)
}
