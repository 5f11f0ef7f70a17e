//! compsim CLI: run command-language scripts or an interactive session.
//!
//! Exit codes:
//! - 0: Success (engine failures are part of the transcript)
//! - 1: Usage or input error

mod commands;
mod console;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "repl" => commands::repl(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: compsim <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <script> [--quiet]   Run a script, echoing each line");
    eprintln!("  repl                     Read lines from stdin until exit()");
}
