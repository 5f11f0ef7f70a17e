//! CLI command implementations.

use std::fs;
use std::io::{self, BufRead, Write};

use compsim_parser::Session;

use crate::console::Console;

/// Run a script file through a fresh session.
pub fn run(args: &[String]) -> Result<(), i32> {
    let mut input = None;
    let mut quiet = false;

    for arg in args {
        match arg.as_str() {
            "--quiet" | "-q" => quiet = true,
            flag if flag.starts_with('-') => {
                eprintln!("error: unknown option '{flag}'");
                eprintln!("Usage: compsim run <script> [--quiet]");
                return Err(1);
            }
            path if input.is_none() => input = Some(path),
            extra => {
                eprintln!("error: unexpected argument '{extra}'");
                eprintln!("Usage: compsim run <script> [--quiet]");
                return Err(1);
            }
        }
    }

    let Some(input) = input else {
        eprintln!("error: run requires a script file");
        eprintln!("Usage: compsim run <script> [--quiet]");
        return Err(1);
    };

    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })?;

    let mut session = Session::new(Console::new(quiet));
    session.read_source(&text);
    Ok(())
}

/// Read lines from stdin until `exit()` or end of input.
pub fn repl(args: &[String]) -> Result<(), i32> {
    if let Some(extra) = args.first() {
        eprintln!("error: unexpected argument '{extra}'");
        eprintln!("Usage: compsim repl");
        return Err(1);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::new(Console::new(true));

    loop {
        eprint!("> ");
        let _ = io::stderr().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error: cannot read stdin: {e}");
                return Err(1);
            }
            None => break,
        };

        session.read_line(&line);
        if session.sink_mut().take_ended() {
            break;
        }
    }

    Ok(())
}
