extern crate clap;
extern crate thiserror;

pub mod interpreter;
pub mod parser;

use std::{io, process::ExitCode, time::Instant};

use clap::Parser;
use colored::Colorize;

use crate::interpreter::{ast_interpreter::AstInterpreter, Runtime};

/// Brainf**k tree-walking interpreter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to operate on
    #[arg()]
    file: String,

    /// Output the ast instead of running the program
    #[arg(long)]
    ast: bool,

    /// How many cells the tape holds
    #[arg(short, long, default_value_t = 30_000)]
    tape_size: usize,

    /// Print phase timings to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let text = match std::fs::read_to_string(&args.file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut now = Instant::now();
    let program = match parser::parser::Parser::new(&text).parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            return ExitCode::FAILURE;
        }
    };
    if args.verbose {
        eprintln!("{} {:.2?}", "Finished parsing in".green(), now.elapsed());
    }

    if args.ast {
        println!("{:#?}", program);
        return ExitCode::SUCCESS;
    }

    // timings and errors go to stderr so they never mix into program output
    let mut runtime = Runtime::new(
        args.tape_size,
        Box::new(io::stdin().lock()),
        Box::new(io::stdout()),
    );
    now = Instant::now();
    if let Err(e) = AstInterpreter::new().interpret(&mut runtime, &program) {
        eprintln!("{0:}: {1:}", "Error".red(), e);
        return ExitCode::FAILURE;
    }
    if args.verbose {
        eprintln!(
            "{} {:.2?}",
            "Finished ast-interpreter in".green(),
            now.elapsed()
        );
    }

    ExitCode::SUCCESS
}
