use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::{Flagged, Record};

/// Display format for note timestamps and expense dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    Ok(())
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::validation(field, format!("{value} is not a positive number")));
    }
    Ok(())
}

// --- LIBRARY ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub available: bool,
}

impl Book {
    pub fn new(title: &str, author: &str, year: i32, available: bool) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            available,
        }
    }
}

impl Record for Book {
    // Catalogs allow duplicate copies, so books never report a key.
    type Key = str;
    const KIND: &'static str = "book";

    fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("author", &self.author)?;
        if self.year < 0 {
            return Err(Error::validation("year", format!("{} is before year zero", self.year)));
        }
        Ok(())
    }
}

// --- CONTACTS ---

const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 9..=15;

fn email_shape() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("email pattern is valid"))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub favorite: bool,
}

impl Contact {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            favorite: false,
        }
    }
}

impl Record for Contact {
    type Key = str;
    const KIND: &'static str = "contact";

    fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        let digits_only = self.phone.chars().all(|c| c.is_ascii_digit());
        if !digits_only || !PHONE_DIGITS.contains(&self.phone.len()) {
            return Err(Error::validation("phone", "expected 9 to 15 digits and nothing else"));
        }
        if !email_shape().is_match(&self.email) {
            return Err(Error::validation("email", format!("'{}' is not an email address", self.email)));
        }
        Ok(())
    }

    fn key(&self) -> Option<&str> {
        Some(&self.phone)
    }
}

impl Flagged for Contact {
    fn flag(&self) -> bool {
        self.favorite
    }

    fn set_flag(&mut self, value: bool) {
        self.favorite = value;
    }
}

// --- NOTES ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Note {
    pub title: String,
    pub content: String,
    pub important: bool,
    /// Set once when the note is written.
    pub created_at: NaiveDateTime,
}

impl Note {
    pub fn new(title: &str, content: &str, created_at: NaiveDateTime) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            important: false,
            created_at,
        }
    }

    pub fn formatted_date(&self) -> String {
        self.created_at.format(DATE_FORMAT).to_string()
    }
}

impl Record for Note {
    type Key = str;
    const KIND: &'static str = "note";

    fn validate(&self) -> Result<()> {
        require_text("title", &self.title)
    }
}

impl Flagged for Note {
    fn flag(&self) -> bool {
        self.important
    }

    fn set_flag(&mut self, value: bool) {
        self.important = value;
    }
}

// --- BMI ---

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Half-open bands: [..18.5) [18.5..25) [25..30) [30..).
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obesity",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One weighing. `bmi` and `category` are derived at construction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BmiEntry {
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiEntry {
    pub fn measure(weight_kg: f64, height_m: f64) -> Result<Self> {
        require_positive("weight", weight_kg)?;
        require_positive("height", height_m)?;
        let bmi = weight_kg / (height_m * height_m);
        Ok(Self {
            weight_kg,
            height_m,
            bmi,
            category: BmiCategory::classify(bmi),
        })
    }
}

impl Record for BmiEntry {
    type Key = str;
    const KIND: &'static str = "bmi entry";

    fn validate(&self) -> Result<()> {
        require_positive("weight", self.weight_kg)?;
        require_positive("height", self.height_m)
    }
}

// --- EXPENSES ---

pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Expense {
    /// Assigned by the ledger.
    pub id: u32,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDateTime,
    pub observations: String,
}

impl Record for Expense {
    type Key = u32;
    const KIND: &'static str = "expense";

    fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("category", &self.category)?;
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::validation("amount", format!("{} is not a valid amount", self.amount)));
        }
        Ok(())
    }

    fn key(&self) -> Option<&u32> {
        Some(&self.id)
    }
}
