//! Interactive read loop
//!
//! The loop owns the run flag's lifecycle. `(exit ())` only moves the flag
//! to ConfirmExit; the next line is then evaluated like any other, and the
//! loop terminates exactly when that evaluation reports the unbound symbol
//! `y`. Any other outcome resumes the session.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::diagnostics::SourceFile;
use crate::interp::{Env, RunState, Value};

/// What one processed line asks the loop to do next
enum LineOutcome {
    /// Keep reading
    Continue,
    /// The exit confirmation succeeded
    Terminate,
}

/// Evaluate one line and apply the run-flag transitions the loop owns.
/// Returns the rendered result, if there is one to show.
///
/// This is the testable core of the REPL; it does no I/O beyond the `Env`.
fn process_line(env: &mut Env, line: &str) -> (LineOutcome, Option<String>) {
    let file = SourceFile::new("<stdin>", line);
    let confirming = env.run_state() == RunState::ConfirmExit;

    let result = match crate::run_line(env, &file) {
        Ok(value) => value,
        Err(err) => {
            // Syntax errors render through miette and never touch the
            // environment or the run flag
            return (
                LineOutcome::Continue,
                Some(format!("{:?}", miette::Report::new(err))),
            );
        }
    };

    if confirming {
        // Typing `y` surfaces as an unbound-symbol error, which is the
        // confirmation protocol
        if result == Value::error("Unbound symbol 'y'") {
            env.set_run_state(RunState::Terminated);
            return (LineOutcome::Terminate, None);
        }
        env.set_run_state(RunState::Running);
        return (LineOutcome::Continue, None);
    }

    (LineOutcome::Continue, Some(result.to_string()))
}

fn prompt(env: &Env) -> &'static str {
    match env.run_state() {
        RunState::ConfirmExit => "Exit qex? (y/n) ",
        _ => "qex> ",
    }
}

/// Run the interactive loop until the run flag reaches Terminated
pub fn run_repl(env: &mut Env) -> miette::Result<()> {
    println!("Qex Version {}", crate::VERSION);
    println!("Press Ctrl+c to Exit\n");

    let mut rl = DefaultEditor::new()
        .map_err(|e| miette::miette!("Failed to initialize line editor: {}", e))?;

    while env.run_state() != RunState::Terminated {
        match rl.readline(prompt(env)) {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let (outcome, display) = process_line(env, &line);
                if let Some(text) = display {
                    println!("{}", text);
                }
                if matches!(outcome, LineOutcome::Terminate) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: cancel the current line
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D: leave without confirmation
                break;
            }
            Err(err) => {
                return Err(miette::miette!("Readline error: {}", err));
            }
        }
    }

    Ok(())
}
