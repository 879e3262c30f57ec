use std::{
    io::{self, BufRead, Write},
    num::NonZeroUsize,
};

use clap::Parser;
use infixa::{
    analysis::{
        batches::{extract_literals, partition_even_odd, BatchList},
        stats::aggregate,
    },
    engine::{
        backend::core::BackendKind,
        eval::{Engine, ReduceObserver},
        number::Number,
        validate::{strip_whitespace, validate},
    },
};

/// infixa is a stack-backed calculator for flat infix arithmetic over
/// `+ - * / %`, parentheses and implicit multiplication.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Stack backend used for evaluation: array, linked or queue. Without
    /// it, interactive mode offers the choice as a menu.
    #[arg(short, long)]
    backend: Option<BackendKind>,

    /// Prints every reduction step while evaluating.
    #[arg(short, long)]
    trace: bool,

    /// Groups the expression's literals into queues of this capacity and
    /// shows them alongside even/odd partitions.
    #[arg(short, long)]
    queue_capacity: Option<NonZeroUsize>,

    /// Prints aggregate statistics over the expression's literals.
    #[arg(short, long)]
    report: bool,

    /// Evaluates a single expression and exits instead of prompting.
    expression: Option<String>,
}

/// Observer that prints an `Evaluated: a op b = result` line for each
/// reduction.
struct PrintTrace;

impl ReduceObserver for PrintTrace {
    fn reduced(&mut self, left: &Number, op: char, right: &Number, result: &Number) {
        println!("Evaluated: {left} {op} {right} = {result}");
    }
}

fn main() {
    let args = Args::parse();

    if let Some(source) = args.expression.clone() {
        let kind = args.backend.unwrap_or(BackendKind::Array);
        let ok = match check(&source) {
            Some(expression) => evaluate_and_print(&expression, kind, &args),
            None => false,
        };
        if !ok {
            std::process::exit(1);
        }
        return;
    }

    interactive(&args);
    println!("Calculator closed.");
}

/// Strips whitespace and validates, printing the guidance block on failure.
fn check(source: &str) -> Option<String> {
    let expression = strip_whitespace(source);

    match validate(&expression) {
        Ok(()) => Some(expression),
        Err(error) => {
            println!("Invalid expression: {error}");
            println!("Check for:");
            println!("- Only numbers, + - * / % . ( ) allowed");
            println!("- No alphabets or symbols");
            println!("- Balanced parentheses");
            println!("- No trailing or repeating operators");
            None
        },
    }
}

/// Evaluates a validated expression, printing the result or the error.
/// Returns `true` on success.
fn evaluate_and_print(expression: &str, kind: BackendKind, args: &Args) -> bool {
    let mut engine = Engine::new(kind);
    if args.trace {
        engine = engine.with_observer(Box::new(PrintTrace));
    }

    match engine.evaluate(expression) {
        Ok(result) => {
            println!("Final Result: {result}");
            print_extras(expression, args);
            true
        },
        Err(error) => {
            println!("Error: {error}");
            false
        },
    }
}

/// Prints the literal queues and/or the aggregate report when requested.
fn print_extras(expression: &str, args: &Args) {
    if args.queue_capacity.is_none() && !args.report {
        return;
    }

    let Ok(literals) = extract_literals(expression) else {
        return;
    };

    if let Some(capacity) = args.queue_capacity {
        let mut input = BatchList::new(capacity);
        for &value in &literals {
            input.push(value);
        }
        let (even, odd) = partition_even_odd(&literals, capacity);

        println!("Input Queues:");
        println!("{input}");
        println!("Even Queues:");
        println!("{even}");
        println!("Odd Queues:");
        println!("{odd}");
    }

    if args.report {
        if let Some(stats) = aggregate(&literals) {
            println!("Results:");
            println!("{stats}");
        }
    }
}

/// The prompt loop: pick a backend, evaluate expressions until the user
/// declines, optionally switch backends and go again.
fn interactive(args: &Args) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let kind = match args.backend {
            Some(kind) => kind,
            None => match choose_backend(&mut lines) {
                Some(kind) => kind,
                None => return,
            },
        };

        loop {
            let Some(input) = prompt(&mut lines, "Enter expression: ") else {
                return;
            };
            // Invalid input goes straight back to the expression prompt.
            let Some(expression) = check(&input) else {
                continue;
            };
            evaluate_and_print(&expression, kind, args);

            let Some(again) = prompt(&mut lines, "Evaluate another expression? (y/n): ") else {
                return;
            };
            if !again.trim().eq_ignore_ascii_case("y") {
                break;
            }
        }

        if args.backend.is_some() {
            return;
        }
        let Some(switch) = prompt(&mut lines, "Switch data structure? (y/n): ") else {
            return;
        };
        if !switch.trim().eq_ignore_ascii_case("y") {
            return;
        }
    }
}

/// Shows the backend menu until the user makes a valid choice.
/// Returns `None` when input runs out.
fn choose_backend(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<BackendKind> {
    loop {
        println!("Choose Data Structure to perform :");
        println!("1. Array");
        println!("2. LinkedList");
        println!("3. Queue");

        let choice = prompt(lines, "Enter choice: ")?;
        match choice.trim().parse::<BackendKind>() {
            Ok(kind) => return Some(kind),
            Err(_) => println!("Invalid choice. Try again."),
        }
    }
}

/// Prints a prompt and reads one line. Returns `None` when input runs out.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, message: &str) -> Option<String> {
    print!("{message}");
    let _ = io::stdout().flush();
    lines.next()?.ok()
}
