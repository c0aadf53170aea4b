use std::io::{self, BufRead, Write};

use super::{run_menu, Console};
use crate::error::Error;
use crate::library::Library;
use crate::model::Book;
use crate::parser;

const OPTIONS: &[&str] = &[
    "List catalog",
    "Search by author",
    "Search by title",
    "Search by year range",
    "Available books",
    "Sorted by year",
    "Add a book",
    "Statistics",
];

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, library: &mut Library) -> io::Result<()> {
    run_menu(console, "Library Catalog", OPTIONS, |console, choice| match choice {
        1 => print_books(console, &library.books().iter().collect::<Vec<_>>()),
        2 => {
            let Some(author) = console.read_line("Author: ")? else { return Ok(()) };
            print_books(console, &library.by_author(&author))
        }
        3 => {
            let Some(title) = console.read_line("Title: ")? else { return Ok(()) };
            print_books(console, &library.by_title(&title))
        }
        4 => {
            let Some((from, to)) = console.ask("Years (e.g. 1940-1970): ", parse_years)? else {
                return Ok(());
            };
            print_books(console, &library.by_year_range(from, to))
        }
        5 => print_books(console, &library.available()),
        6 => print_books(console, &library.sorted_by_year()),
        7 => add_book(console, library),
        _ => print_statistics(console, library),
    })
}

fn parse_years(line: &str) -> crate::error::Result<(i32, i32)> {
    let (from, to) = parser::parse_range(line)?;
    let narrow = |y: i64| i32::try_from(y).map_err(|_| Error::InvalidArgument(format!("year {y} is out of range")));
    Ok((narrow(from)?, narrow(to)?))
}

fn add_book<R: BufRead, W: Write>(console: &mut Console<R, W>, library: &mut Library) -> io::Result<()> {
    let Some(title) = console.read_line("Title: ")? else { return Ok(()) };
    let Some(author) = console.read_line("Author: ")? else { return Ok(()) };
    let Some(year) = console.ask("Year: ", parser::parse_integer)? else { return Ok(()) };
    let Some(available) = console.ask("Available? (y/n): ", parser::parse_yes_no)? else {
        return Ok(());
    };

    let year = match i32::try_from(year) {
        Ok(year) => year,
        Err(_) => return console.say(format_args!("Error: year {year} is out of range")),
    };
    let result = library.add(Book::new(title.trim(), author.trim(), year, available));
    console.report(result, |book| format!("Added \"{}\".", book.title))
}

fn print_books<R: BufRead, W: Write>(console: &mut Console<R, W>, books: &[&Book]) -> io::Result<()> {
    if books.is_empty() {
        return console.say("No books found.");
    }
    for book in books {
        let status = if book.available { "available" } else { "on loan" };
        console.say(format_args!("  {} - {} ({}) [{}]", book.title, book.author, book.year, status))?;
    }
    Ok(())
}

fn print_statistics<R: BufRead, W: Write>(console: &mut Console<R, W>, library: &Library) -> io::Result<()> {
    let stats = library.statistics();
    console.say(format_args!("Total books: {}", stats.total))?;
    console.say(format_args!("Available books: {}", stats.matching))?;
    console.say("Books per author:")?;
    for (author, count) in &stats.groups {
        console.say(format_args!(" - {author}: {count}"))?;
    }
    match &stats.top_group {
        Some((author, _)) => console.say(format_args!("Author with most books: {author}")),
        None => console.say("Author with most books: none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::drive;

    #[test]
    fn add_then_search_and_stats() {
        let mut library = Library::new();
        let out = drive(
            "7\nPedro Páramo\nJuan Rulfo\n1955\ns\n2\nrulfo\n4\n1950-1960\n8\n0\n",
            |c| run(c, &mut library),
        );
        assert!(out.contains("Added \"Pedro Páramo\"."));
        assert!(out.contains("  Pedro Páramo - Juan Rulfo (1955) [available]"));
        assert!(out.contains("Total books: 6"));
        assert!(out.contains("Available books: 4"));
        assert!(out.contains("Author with most books: Gabriel García Márquez"));
        assert_eq!(library.len(), 6);
    }

    #[test]
    fn bad_year_range_reprompts() {
        let mut library = Library::new();
        let out = drive("4\nsometime\n1600-1700\n0\n", |c| run(c, &mut library));
        assert!(out.contains("Error: could not parse 'sometime'"));
        assert!(out.contains("Don Quijote - Miguel de Cervantes (1605)"));
    }
}
