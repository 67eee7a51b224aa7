use std::{
    fs,
    io::{self, BufRead, Write},
};

use aspen::{InterpretError, evaluate, new_environment};
use clap::Parser;

const PROMPT: &str = ">> ";

/// aspen is a small, dynamically typed scripting language with first-class
/// functions, arrays and hash maps.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells aspen to read the program from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Program text, or a path when --file is given. Omit it to start the
    /// interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.contents {
        Some(contents) => {
            let script = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                    std::process::exit(1);
                })
            } else {
                contents
            };
            run_script(&script);
        },
        None => repl(),
    }
}

/// Runs a whole script in a fresh environment and prints its result.
fn run_script(script: &str) {
    let env = new_environment();

    match evaluate(script, &env) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        },
    }
}

/// The interactive prompt. Bindings persist across lines; an empty line or
/// end of input exits.
fn repl() {
    let env = new_environment();
    let stdin = io::stdin();

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            return;
        }
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        match evaluate(line, &env) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(InterpretError::Parse(errors)) => {
                for error in errors {
                    println!("{error}");
                }
            },
            Err(error) => println!("{error}"),
        }
    }
}
