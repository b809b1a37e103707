use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tinylang::Interpreter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match std::env::args().nth(1) {
        Some(path) => run_file(&path),
        None => repl(),
    }
}

fn run_file(path: &str) -> Result<()> {
    let source = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;

    let result = tinylang::run(&source)?;
    for line in &result.output {
        println!("{line}");
    }

    Ok(())
}

fn repl() -> Result<()> {
    println!("tinylang repl");
    println!("type 'vars' to list variables, 'exit' or 'quit' to leave");

    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!(">>> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        match input {
            "" => continue,
            "exit" | "quit" => break,
            "vars" => {
                let mut entries: Vec<_> = interpreter.symbols().iter().collect();
                entries.sort_by_key(|(name, _)| name.clone());
                for (name, value) in entries {
                    println!("  {name} = {value}");
                }
                continue;
            }
            _ => {}
        }

        match tinylang::parse(input) {
            Ok(program) => match interpreter.interpret(&program) {
                Ok(()) => {
                    for line in interpreter.take_output() {
                        println!("{line}");
                    }
                }
                Err(err) => {
                    // drop output buffered before the failure, as run() does
                    interpreter.take_output();
                    println!("error: {err}");
                }
            },
            Err(err) => println!("error: {err}"),
        }
    }

    Ok(())
}
