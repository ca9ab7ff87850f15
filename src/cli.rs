// src/cli.rs
use std::error::Error;

use log::Level;

use crate::{
    config::options::RunOptions,
    core::net::HttpFetcher,
    progress::Progress,
    runner::{self, RunSummary},
};

pub enum Command {
    Run(RunOptions),
    Help,
}

/// Console sink: the `log` facade already prints every line, so this only
/// keeps the tallies and prints the closing summary.
#[derive(Default)]
pub struct ConsoleProgress {
    pub errors: usize,
    pub warnings: usize,
}

impl Progress for ConsoleProgress {
    fn log(&mut self, level: Level, _msg: &str) {
        match level {
            Level::Error => self.errors += 1,
            Level::Warn => self.warnings += 1,
            _ => {}
        }
    }

    fn finish(&mut self, s: &RunSummary) {
        println!(
            "Found {} cartridge(s): {} saved, {} recorded, {} skipped ({} error(s), {} warning(s))",
            s.found, s.saved, s.recorded, s.failed, self.errors, self.warnings
        );
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        Command::Run(opts) => {
            let fetcher = HttpFetcher::new()?;
            let mut sink = ConsoleProgress::default();
            // Per-item failures are logged, not fatal
            runner::run(&opts, &fetcher, &mut sink);
            Ok(())
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-u" | "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                if !v.starts_with("http://") && !v.starts_with("https://") {
                    return Err(format!("Not an http(s) URL: {}", v).into());
                }
                opts.set_listing_url(&v);}
            "-o" | "--out" => opts.set_folder(&args.next().ok_or("Missing output folder")?),
            "--no-images" => opts.images = false,
            "--no-gamelist" => opts.gamelist = false,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(Command::Run(opts))
}
