//! Command-line converter from VEX configuration files to JSON.
//!
//! Reads from a file path or standard input, writes JSON to a file path or
//! standard output. On any parse failure the diagnostic goes to stderr and
//! the process exits non-zero without emitting partial JSON.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser as ClapParser;

use vex_cfg::parser::Parser;
use vex_cfg::{comment, export, VexError};

/// Convert VEX configuration files to JSON
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input configuration file (defaults to standard input)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output JSON file (defaults to standard output)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), VexError> {
    let raw = read_input(args.input.as_deref())?;
    let stripped = comment::strip_comments(&raw);
    let document = Parser::new(&stripped).parse()?;
    let json = export::to_json_string(&document)?;

    match &args.output {
        Some(path) => fs::write(path, json + "\n").map_err(|e| VexError::FileError {
            message: format!("Failed to write output: {}", e),
            path: path.to_string_lossy().to_string(),
        }),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

fn read_input(path: Option<&std::path::Path>) -> Result<String, VexError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| VexError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| VexError::FileError {
                    message: format!("Failed to read stdin: {}", e),
                    path: "<stdin>".into(),
                })?;
            Ok(buf)
        }
    }
}
