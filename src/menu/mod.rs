//! Numbered console menus, one per exercise.
//!
//! Menus run over any `BufRead`/`Write` pair so they can be driven from
//! tests. End of input behaves like choosing "Exit".

pub mod bmi;
pub mod contacts;
pub mod expenses;
pub mod guess;
pub mod library;
pub mod notes;
pub mod temperature;
pub mod text;

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::parser;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Prompt until `parse` accepts the line. Each rejection is printed.
    pub fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Result<T>) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(format_args!("Error: {e}"))?,
            }
        }
    }

    /// Print the outcome of a store operation; errors never end the menu.
    pub fn report<T>(&mut self, result: Result<T>, on_success: impl FnOnce(T) -> String) -> io::Result<()> {
        match result {
            Ok(value) => self.say(on_success(value)),
            Err(e) => self.say(format_args!("Error: {e}")),
        }
    }
}

/// Show `options` as 1..=n plus `0. Exit` and dispatch until exit or EOF.
pub fn run_menu<R, W, F>(console: &mut Console<R, W>, title: &str, options: &[&str], mut handle: F) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut Console<R, W>, usize) -> io::Result<()>,
{
    console.say(format_args!("=== {title} ==="))?;
    loop {
        console.blank()?;
        for (i, option) in options.iter().enumerate() {
            console.say(format_args!("{}. {option}", i + 1))?;
        }
        console.say("0. Exit")?;

        let Some(line) = console.read_line("Choose an option: ")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parser::parse_menu_choice(&line) {
            Ok(0) => break,
            Ok(n) if (n as usize) <= options.len() => handle(console, n as usize)?,
            Ok(n) => console.say(format_args!("Invalid option {n}, try again."))?,
            Err(e) => console.say(format_args!("Error: {e}"))?,
        }
    }
    console.say("Goodbye.")
}

#[cfg(test)]
pub(crate) fn drive(input: &str, run: impl FnOnce(&mut Console<io::Cursor<Vec<u8>>, Vec<u8>>) -> io::Result<()>) -> String {
    let mut console = Console::new(io::Cursor::new(input.as_bytes().to_vec()), Vec::new());
    run(&mut console).unwrap();
    let (_, out) = console.into_inner();
    String::from_utf8(out).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_choices_reprompt_and_eof_exits() {
        let mut seen = Vec::new();
        let out = drive("7\nabc\n\n2\n", |c| run_menu(c, "Demo", &["One", "Two"], |_, n| {
            seen.push(n);
            Ok(())
        }));
        assert_eq!(seen, vec![2]);
        assert!(out.contains("Invalid option 7"));
        assert!(out.contains("could not parse 'abc' as a menu option"));
        assert!(out.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn ask_retries_until_valid() {
        let out = drive("x\n4,5\n", |c| {
            let value = c.ask("Amount: ", parser::parse_decimal)?;
            assert_eq!(value, Some(4.5));
            Ok(())
        });
        assert_eq!(out.matches("Amount: ").count(), 2);
    }
}
