use std::io::{self, BufRead, Write};

use super::{run_menu, Console};
use crate::parser;
use crate::temperature::{convert, Conversion, Scale};

const OPTIONS: &[&str] = &[
    "Celsius to Fahrenheit",
    "Kelvin to Celsius",
    "Fahrenheit to Celsius",
    "Celsius to Kelvin",
    "Other (type the scales)",
    "Show history",
];

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    let mut history: Vec<Conversion> = Vec::new();

    run_menu(console, "Temperature Converter", OPTIONS, |console, choice| {
        let (from, to) = match choice {
            1 => (Scale::Celsius, Scale::Fahrenheit),
            2 => (Scale::Kelvin, Scale::Celsius),
            3 => (Scale::Fahrenheit, Scale::Celsius),
            4 => (Scale::Celsius, Scale::Kelvin),
            5 => {
                let Some(from) = console.ask("From scale: ", |s| s.parse::<Scale>())? else { return Ok(()) };
                let Some(to) = console.ask("To scale: ", |s| s.parse::<Scale>())? else { return Ok(()) };
                (from, to)
            }
            _ => return print_history(console, &history),
        };

        let Some(value) = console.ask("Temperature: ", parser::parse_decimal)? else { return Ok(()) };
        match convert(value, from, to) {
            Ok(reading) => {
                console.say(format_args!("Result: {:.2} {}", reading.value, reading.scale))?;
                if let Some(advisory) = reading.advisory {
                    console.say(advisory)?;
                }
                history.push(Conversion { input: value, from, to, result: reading.value });
                Ok(())
            }
            Err(e) => console.say(format_args!("Error: {e}")),
        }
    })
}

fn print_history<R: BufRead, W: Write>(console: &mut Console<R, W>, history: &[Conversion]) -> io::Result<()> {
    console.say("--- History ---")?;
    if history.is_empty() {
        return console.say("No conversions yet.");
    }
    for c in history {
        console.say(format_args!("{} {} -> {:.2} {}", c.input, c.from, c.result, c.to))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::drive;

    #[test]
    fn conversions_warnings_and_history() {
        let out = drive("1\n100\n2\n-5\n5\nkelvin\nfahrenheit\n0\n6\n0\n", run);
        assert!(out.contains("Result: 212.00 Fahrenheit"));
        assert!(out.contains("Extreme temperature detected!"));
        assert!(out.contains("Error: -5 Kelvin is below absolute zero"));
        assert!(out.contains("Result: -459.67 Fahrenheit"));
        assert!(out.contains("100 Celsius -> 212.00 Fahrenheit"));
        assert!(!out.contains("-5 Kelvin ->"));
    }

    #[test]
    fn unknown_scale_reprompts() {
        let out = drive("5\nrankine\ncelsius\nkelvin\n20\n0\n", run);
        assert!(out.contains("Error: invalid argument: unknown scale 'rankine'"));
        assert!(out.contains("Result: 293.15 Kelvin"));
    }
}
