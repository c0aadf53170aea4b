use std::io::{self, BufRead, Write};

use super::{run_menu, Console};
use crate::text::{analyze, count_occurrences, TextStats};

const OPTIONS: &[&str] = &["Analyze a text", "Count a word or phrase"];

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    run_menu(console, "Text Analyzer", OPTIONS, |console, choice| {
        if choice == 1 {
            let Some(text) = console.read_line("Text to analyze: ")? else { return Ok(()) };
            return match analyze(&text) {
                Ok(stats) => print_report(console, &stats),
                Err(e) => console.say(format_args!("Error: {e}")),
            };
        }

        let Some(text) = console.read_line("Base text: ")? else { return Ok(()) };
        let Some(phrase) = console.read_line("Word or phrase: ")? else { return Ok(()) };
        let count = count_occurrences(&text, &phrase);
        console.say(format_args!("'{phrase}' appears {count} times."))
    })
}

fn print_report<R: BufRead, W: Write>(console: &mut Console<R, W>, stats: &TextStats) -> io::Result<()> {
    console.say("--- Report ---")?;
    console.say(format_args!("Words: {}", stats.word_count))?;
    console.say(format_args!("Characters (with spaces): {}", stats.char_count))?;
    console.say(format_args!("Characters (without spaces): {}", stats.char_count_without_spaces))?;
    if let Some((word, count)) = &stats.most_frequent {
        console.say(format_args!("Most frequent word: '{word}' ({count} times)"))?;
    }
    console.say("Top 5 words:")?;
    for (word, count) in stats.top_words(5) {
        console.say(format_args!("   - {word}: {count}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::drive;

    #[test]
    fn report_and_phrase_count() {
        let out = drive("1\nHola hola HOLA mundo\n1\n   \n2\nUno, dos y UNO\nuno\n0\n", run);
        assert!(out.contains("Words: 4"));
        assert!(out.contains("Most frequent word: 'hola' (3 times)"));
        assert!(out.contains("   - mundo: 1"));
        assert!(out.contains("Error: text is empty"));
        assert!(out.contains("'uno' appears 2 times."));
    }
}
