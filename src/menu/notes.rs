use std::io::{self, BufRead, Write};
use std::path::Path;

use super::{run_menu, Console};
use crate::error::Error;
use crate::notes::NoteBook;
use crate::parser;

const OPTIONS: &[&str] = &[
    "New note",
    "Notes (newest first)",
    "Search notes",
    "Mark/unmark important",
    "Export to text file",
];

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, notes: &mut NoteBook, export_path: &Path) -> io::Result<()> {
    run_menu(console, "Quick Notes", OPTIONS, |console, choice| match choice {
        1 => {
            let Some(title) = console.read_line("Title: ")? else { return Ok(()) };
            let Some(content) = console.read_line("Content: ")? else { return Ok(()) };
            let result = notes.create(&title, &content);
            console.report(result, |note| format!("Note \"{}\" created.", note.title))
        }
        2 => {
            if notes.is_empty() {
                return console.say("No notes yet.");
            }
            for note in notes.list_by_date() {
                let mark = if note.important { "★" } else { " " };
                console.say(format_args!("{mark} [{}] {}", note.formatted_date(), note.title))?;
            }
            Ok(())
        }
        3 => {
            let Some(query) = console.read_line("Text to search: ")? else { return Ok(()) };
            let found = notes.search(&query);
            if found.is_empty() {
                return console.say("No matches.");
            }
            for line in found {
                console.say(line)?;
            }
            Ok(())
        }
        4 => {
            if notes.is_empty() {
                return console.say("No notes yet.");
            }
            for (i, note) in notes.all().iter().enumerate() {
                console.say(format_args!("{i}. {}", note.title))?;
            }
            let Some(position) = console.ask("Note number: ", parse_position)? else { return Ok(()) };
            let result = notes.toggle_important(position);
            console.report(result, |important| {
                format!("Note is now {}.", if important { "important" } else { "normal" })
            })
        }
        _ => {
            let result = notes.export_to(export_path);
            console.report(result, |path| format!("File saved to: {}", path.display()))
        }
    })
}

fn parse_position(line: &str) -> crate::error::Result<usize> {
    let n = parser::parse_integer(line)?;
    usize::try_from(n).map_err(|_| Error::NotFound(format!("position {n}")))
}
