//! Lam CLI
//!
//! `lam <parsed|output|result> [options] [files...]`

use std::io;
use std::path::PathBuf;

use lamc::{init_tracing, open_sources, run, stdio_for, Mode, RunOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        std::process::exit(1);
    };

    if command == "help" || command == "--help" || command == "-h" {
        print_usage();
        return;
    }

    let mode: Mode = match command.parse() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage();
            std::process::exit(1);
        }
    };

    let mut options = RunOptions::new(mode);
    let mut files = Vec::new();
    for arg in args.iter().skip(2) {
        if arg == "-a" || arg == "--skip-assignments" {
            options.skip_assignments = true;
        } else if let Some(value) = arg.strip_prefix("--max-steps=") {
            match value.parse::<u64>() {
                Ok(limit) => options.max_steps = Some(limit),
                Err(_) => {
                    eprintln!("error: invalid step limit '{value}'");
                    std::process::exit(1);
                }
            }
        } else if arg.starts_with('-') && arg != "-" {
            eprintln!("error: unknown option '{arg}'");
            print_usage();
            std::process::exit(1);
        } else if arg != "-" {
            files.push(PathBuf::from(arg));
        }
    }

    let result = open_sources(&files).and_then(|source| {
        let io = stdio_for(mode);
        run(source, &options, &io, &mut io::stdout().lock())
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Lambda calculus interpreter");
    eprintln!();
    eprintln!("Usage: lam <mode> [options] [files...]");
    eprintln!();
    eprintln!("Modes:");
    eprintln!("  parsed    Print the parsed program");
    eprintln!("  output    Run the program, printed bytes go to stdout");
    eprintln!("  result    Run the program with printing disabled, then print its value");
    eprintln!();
    eprintln!("Files are concatenated in order; with none, the program is read from stdin.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -a, --skip-assignments   parsed: print the desugared body only");
    eprintln!("  --max-steps=<n>          Stop evaluation after n steps");
}
