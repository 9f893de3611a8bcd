//! # chatpulse CLI
//!
//! Command-line interface for the chatpulse library.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser as ClapParser;
use tracing::info;

use chatpulse::cli::Args;
use chatpulse::{Analyzer, ChatpulseError, logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), ChatpulseError> {
    let args = <Args as ClapParser>::parse();
    logging::init(args.verbose);

    let bytes = read_input(&args)?;
    let analyzer = Analyzer::new().with_config(args.analysis_config());
    let outcome = analyzer.run(&bytes)?;

    // Render fully before writing anything.
    let json = if args.pretty {
        outcome.report.to_json_pretty()?
    } else {
        outcome.report.to_json()?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json.as_bytes())?;
            info!(path = %path, "report written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn read_input(args: &Args) -> Result<Vec<u8>, ChatpulseError> {
    if args.reads_stdin() {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        Ok(fs::read(&args.input)?)
    }
}
