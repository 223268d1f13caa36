use std::io::{self, Write};
use std::process::ExitCode;

use rblex::{init_tracing, run, CliOptions, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let result = run(&options, stdin.lock(), &mut stdout);
    let _ = stdout.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
