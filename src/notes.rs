use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{Error, Result};
use crate::filter::{Order, TextQuery};
use crate::model::Note;
use crate::storage;
use crate::store::RecordStore;

pub const EXPORT_HEADER: &str = "=== MIS NOTAS RAPIDAS ===";
pub const EXPORT_SEPARATOR: &str = "---------------------------";
pub const IMPORTANT_MARK: &str = "★ IMPORTANTE";

/// Source of "now" for new records.
pub type Clock = fn() -> NaiveDateTime;

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[derive(Debug, Clone)]
pub struct NoteBook {
    notes: RecordStore<Note>,
    clock: Clock,
}

impl Default for NoteBook {
    fn default() -> Self {
        Self::with_clock(local_now)
    }
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { notes: RecordStore::new(), clock }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes in the order they were written. Positions index this list.
    pub fn all(&self) -> &RecordStore<Note> {
        &self.notes
    }

    pub fn create(&mut self, title: &str, content: &str) -> Result<&Note> {
        let now = (self.clock)();
        self.notes.insert(Note::new(title.trim(), content.trim(), now))
    }

    /// Newest first. Notes written in the same instant keep creation order.
    pub fn list_by_date(&self) -> Vec<&Note> {
        self.notes.sorted_by(|n| n.created_at, Order::Descending)
    }

    /// One-line summaries of notes whose title or content mention `text`.
    pub fn search(&self, text: &str) -> Vec<String> {
        let query = TextQuery::new(text);
        self.notes
            .find_by(move |n| query.matches(&n.title) || query.matches(&n.content))
            .map(summary)
            .collect()
    }

    pub fn toggle_important(&mut self, position: usize) -> Result<bool> {
        self.notes.toggle_flag_at(position)
    }

    /// Render every note in the plain-text export format.
    pub fn export(&self) -> Result<String> {
        if self.notes.is_empty() {
            return Err(Error::EmptyInput("note collection"));
        }

        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(out, "{EXPORT_HEADER}\n");
        for note in &self.notes {
            let mark = if note.important { IMPORTANT_MARK } else { "" };
            let _ = writeln!(out, "Título: {} {}", note.title, mark);
            let _ = writeln!(out, "Fecha: {}", note.formatted_date());
            let _ = writeln!(out, "Contenido: {}", note.content);
            let _ = writeln!(out, "{EXPORT_SEPARATOR}");
        }
        Ok(out)
    }

    /// Write the export to `path` and return the path written.
    pub fn export_to(&self, path: &Path) -> Result<PathBuf> {
        let text = self.export()?;
        storage::write_text(path, &text)?;
        Ok(path.to_path_buf())
    }
}

fn summary(note: &Note) -> String {
    let mark = if note.important { "[!]" } else { "" };
    format!("{mark} {} ({})", note.title, note.formatted_date())
}
