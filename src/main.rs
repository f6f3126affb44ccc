use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use reckon::{CalcError, Calculator, Config, Op};

fn main() {
    env_logger::init();

    let config = Config::from_env();
    let mut calculator = Calculator::new(config);

    println!("Calculator REPL. Type 'help' for commands, 'exit' to quit.");

    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("failed to start line editor: {err}");
            std::process::exit(1);
        }
    };

    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if !dispatch(&mut calculator, line.trim()) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Bye.");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        }
    }
}

/// Handle one input line. Returns false when the loop should exit.
fn dispatch(calculator: &mut Calculator, line: &str) -> bool {
    match line {
        "" => return true,
        "exit" | "quit" => {
            println!("Bye.");
            return false;
        }
        "help" => {
            let names: Vec<&str> = Op::ALL.iter().map(|op| op.name()).collect();
            println!("Commands: {} a b", names.join("|"));
            println!("history | clear | undo | redo | save | load | help | exit");
            return true;
        }
        "history" => {
            for (i, calc) in calculator.history().list().iter().enumerate() {
                println!(
                    "{}. {}({},{})={} [{}]",
                    i + 1,
                    calc.operation,
                    calc.a,
                    calc.b,
                    calc.result,
                    calc.timestamp
                );
            }
            return true;
        }
        "clear" => {
            calculator.clear_history();
            println!("History cleared.");
            return true;
        }
        "undo" => {
            println!("{}", if calculator.undo() { "Undone." } else { "Nothing to undo." });
            return true;
        }
        "redo" => {
            println!("{}", if calculator.redo() { "Redone." } else { "Nothing to redo." });
            return true;
        }
        "save" => {
            report(calculator.save_history().map(|()| println!("Saved.")));
            return true;
        }
        "load" => {
            report(calculator.load_history().map(|()| println!("Loaded.")));
            return true;
        }
        _ => {}
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [op, a, b] => report(calculator.do_calculation(op, a, b).map(|result| println!("{result}"))),
        _ => println!("Usage: <operation> <a> <b>"),
    }
    true
}

fn report(outcome: Result<(), CalcError>) {
    if let Err(err) = outcome {
        log::error!("{err}");
        println!("Error: {err}");
    }
}
