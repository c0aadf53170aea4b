use std::io::{self, BufRead, Write};

use super::{run_menu, Console};
use crate::contacts::ContactBook;
use crate::model::Contact;

const OPTIONS: &[&str] = &[
    "New contact",
    "Search by name",
    "All contacts (alphabetical)",
    "Favorites",
    "Delete contact",
    "Mark/unmark favorite",
];

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, book: &mut ContactBook) -> io::Result<()> {
    run_menu(console, "Contact Manager", OPTIONS, |console, choice| match choice {
        1 => {
            let Some(name) = console.read_line("Name: ")? else { return Ok(()) };
            let Some(phone) = console.read_line("Phone: ")? else { return Ok(()) };
            let Some(email) = console.read_line("Email: ")? else { return Ok(()) };
            let result = book.add(&name, &phone, &email);
            console.report(result, |c| format!("Contact saved: {}", c.name))
        }
        2 => {
            let Some(query) = console.read_line("Name to search: ")? else { return Ok(()) };
            let found = book.search_by_name(&query);
            if found.is_empty() {
                return console.say("No matches.");
            }
            console.say(format_args!("Found {}:", found.len()))?;
            print_contacts(console, &found)
        }
        3 => {
            let all = book.all_sorted();
            if all.is_empty() {
                return console.say("The address book is empty.");
            }
            print_contacts(console, &all)
        }
        4 => {
            let favorites = book.favorites();
            if favorites.is_empty() {
                return console.say("No favorites yet.");
            }
            print_contacts(console, &favorites)
        }
        5 => {
            let Some(phone) = console.read_line("Phone of the contact to delete: ")? else { return Ok(()) };
            let result = book.delete(&phone);
            console.report(result, |()| "Contact deleted.".to_string())
        }
        _ => {
            let Some(phone) = console.read_line("Phone of the contact: ")? else { return Ok(()) };
            let result = book.toggle_favorite(&phone);
            console.report(result, |favorite| {
                format!("Status: {}", if favorite { "favorite" } else { "normal" })
            })
        }
    })
}

fn print_contacts<R: BufRead, W: Write>(console: &mut Console<R, W>, contacts: &[&Contact]) -> io::Result<()> {
    for c in contacts {
        let star = if c.favorite { "★" } else { " " };
        console.say(format_args!("{star} [{}] - Tel: {} - Email: {}", c.name, c.phone, c.email))?;
    }
    Ok(())
}
