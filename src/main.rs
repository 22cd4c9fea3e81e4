use std::io::{self, BufRead, Write};

use clap::Parser;
use numex::{AngleUnit, Context};

/// numex is a small interactive evaluator for arithmetic expressions with
/// extensible operators, functions, and constants.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat trigonometric arguments and results as degrees instead of
    /// radians.
    #[arg(short, long)]
    degrees: bool,

    /// Expression to evaluate; without one, numex reads lines from stdin.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    let unit = if args.degrees {
        AngleUnit::Degrees
    } else {
        AngleUnit::Radians
    };

    let mut context = Context::new();
    context.register_function("exp", f64::exp);

    if let Some(expression) = args.expression {
        match context.eval(&expression, unit) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(">>> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else { break };
        if line.trim().is_empty() {
            continue;
        }

        match context.eval(&line, unit) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
