//! Linkchain CLI
//!
//! Builds chains from positional arguments and prints their rendering.

use linkchain_cli::{init_tracing, run, usage, Command};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match Command::parse(&args) {
        Ok(Some(command)) => command,
        Ok(None) => {
            print!("{}", usage());
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{}", usage());
            std::process::exit(1);
        }
    };

    match run(&command) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
