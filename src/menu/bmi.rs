use std::io::{self, BufRead, Write};

use super::{run_menu, Console};
use crate::bmi::BmiTracker;
use crate::error::{Error, Result};
use crate::parser;

const OPTIONS: &[&str] = &["New measurement", "History and trend", "Summary by category"];

fn positive(field: &'static str) -> impl Fn(&str) -> Result<f64> {
    move |line| {
        let value = parser::parse_decimal(line)?;
        if value <= 0.0 {
            return Err(Error::validation(field, "must be a positive number"));
        }
        Ok(value)
    }
}

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, tracker: &mut BmiTracker) -> io::Result<()> {
    run_menu(console, "BMI Tracker", OPTIONS, |console, choice| match choice {
        1 => {
            let Some(weight) = console.ask("Weight (kg): ", positive("weight"))? else { return Ok(()) };
            let Some(height) = console.ask("Height (m, e.g. 1.75): ", positive("height"))? else {
                return Ok(());
            };
            let entry = match tracker.record(weight, height) {
                Ok(entry) => entry.clone(),
                Err(e) => return console.say(format_args!("Error: {e}")),
            };
            console.say(format_args!("BMI: {:.2}", entry.bmi))?;
            console.say(format_args!("Category: {}", entry.category))?;
            if let Some(trend) = tracker.weight_trend() {
                let sign = if trend > 0.0 { "+" } else { "" };
                console.say(format_args!("Change since last weight: {sign}{trend:.2} kg"))?;
            }
            Ok(())
        }
        2 => {
            let changes = tracker.changes();
            if changes.is_empty() {
                return console.say("No measurements yet.");
            }
            for (i, (entry, delta)) in changes.into_iter().enumerate() {
                let mut line = format!(
                    "{}. Weight: {}kg | Height: {}m | BMI: {:.2} ({})",
                    i + 1,
                    entry.weight_kg,
                    entry.height_m,
                    entry.bmi,
                    entry.category
                );
                if let Some(delta) = delta {
                    let sign = if delta >= 0.0 { "+" } else { "" };
                    line.push_str(&format!(" | Change: {sign}{delta:.2} kg"));
                }
                console.say(line)?;
            }
            Ok(())
        }
        _ => {
            let stats = tracker.summary();
            console.say(format_args!("Measurements: {}", stats.total))?;
            for (category, count) in &stats.groups {
                console.say(format_args!(" - {category}: {count}"))?;
            }
            Ok(())
        }
    })
}
