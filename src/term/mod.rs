/*!
# Terminal Module

The interactive session: reads lines, feeds them to the evaluator, and
prints the display value or the invalid-input message.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::Evaluator;
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Exact, case-sensitive; checked before tokenization.
const QUIT_SENTINEL: &str = "q";

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut evaluator = Evaluator::new();
    let command = Interface::new("calc")?;
    command.set_prompt("> ")?;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            break;
        }
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string == QUIT_SENTINEL {
            break;
        }
        match evaluator.evaluate(&string) {
            Ok(display) => {
                command.write_fmt(format_args!("{}\n", display))?;
                command.add_history_unique(string);
            }
            Err(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
        }
    }
    Ok(())
}
