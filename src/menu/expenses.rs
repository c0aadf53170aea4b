use std::io::{self, BufRead, Write};
use std::path::Path;

use super::{run_menu, Console};
use crate::error::{Error, Result};
use crate::expenses::ExpenseLedger;
use crate::model::Expense;
use crate::parser;

const OPTIONS: &[&str] = &[
    "Add expense",
    "List expenses (newest first)",
    "Edit expense",
    "Delete expense",
    "Search by title",
    "Totals",
];

fn parse_id(line: &str) -> Result<u32> {
    let n = parser::parse_integer(line)?;
    u32::try_from(n).map_err(|_| Error::NotFound(n.to_string()))
}

/// Run the ledger menu. Every successful change is written to `save_to`.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ledger: &mut ExpenseLedger,
    save_to: Option<&Path>,
) -> io::Result<()> {
    run_menu(console, "Expenses", OPTIONS, |console, choice| {
        let changed = match choice {
            1 => {
                let Some(title) = console.read_line("Title: ")? else { return Ok(()) };
                let Some(amount) = console.read_line("Amount: ")? else { return Ok(()) };
                let Some(observations) = console.read_line("Observations: ")? else { return Ok(()) };
                let result = ledger.add(&title, &amount, &observations).map(|e| e.id);
                let ok = result.is_ok();
                console.report(result, |id| format!("Expense #{id} added."))?;
                ok
            }
            2 => {
                let list = ledger.list();
                if list.is_empty() {
                    console.say("No expenses yet.")?;
                }
                for expense in list {
                    print_expense(console, expense)?;
                }
                false
            }
            3 => {
                let Some(id) = console.ask("Expense id: ", parse_id)? else { return Ok(()) };
                let Some(current) = ledger.get(id).cloned() else {
                    console.say(format_args!("Error: no record found for '{id}'"))?;
                    return Ok(());
                };
                let Some(title) = console.read_line(&format!("Title [{}]: ", current.title))? else { return Ok(()) };
                let Some(amount) = console.read_line(&format!("Amount [{}]: ", current.amount))? else {
                    return Ok(());
                };
                let Some(observations) = console.read_line(&format!("Observations [{}]: ", current.observations))?
                else {
                    return Ok(());
                };
                let title = keep_if_blank(title, &current.title);
                let amount = keep_if_blank(amount, &current.amount.to_string());
                let observations = keep_if_blank(observations, &current.observations);
                let result = ledger.update(id, &title, &amount, &observations).map(|e| e.id);
                let ok = result.is_ok();
                console.report(result, |id| format!("Expense #{id} updated."))?;
                ok
            }
            4 => {
                let Some(id) = console.ask("Expense id: ", parse_id)? else { return Ok(()) };
                let result = ledger.delete(id);
                let ok = result.is_ok();
                console.report(result, |()| format!("Expense #{id} deleted."))?;
                ok
            }
            5 => {
                let Some(query) = console.read_line("Title contains: ")? else { return Ok(()) };
                let found = ledger.search(&query);
                if found.is_empty() {
                    console.say("No matches.")?;
                }
                for expense in found {
                    print_expense(console, expense)?;
                }
                false
            }
            _ => {
                let stats = ledger.by_category();
                console.say(format_args!("Expenses: {} | Total: {:.2}", stats.total, ledger.total()))?;
                for (category, count) in &stats.groups {
                    console.say(format_args!(" - {category}: {count}"))?;
                }
                false
            }
        };

        if changed {
            if let Some(path) = save_to {
                if let Err(e) = ledger.save(path) {
                    console.say(format_args!("Error: could not save expenses: {e}"))?;
                }
            }
        }
        Ok(())
    })
}

fn keep_if_blank(input: String, current: &str) -> String {
    if input.trim().is_empty() {
        current.to_string()
    } else {
        input
    }
}

fn print_expense<R: BufRead, W: Write>(console: &mut Console<R, W>, expense: &Expense) -> io::Result<()> {
    let mut line = format!(
        "#{} {} - {:.2} [{}] {}",
        expense.id,
        expense.title,
        expense.amount,
        expense.category,
        expense.date.format(crate::model::DATE_FORMAT)
    );
    if !expense.observations.is_empty() {
        line.push_str(&format!(" ({})", expense.observations));
    }
    console.say(line)
}
