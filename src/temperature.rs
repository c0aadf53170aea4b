//! Celsius / Fahrenheit / Kelvin conversion with absolute-zero validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const ABSOLUTE_ZERO_C: f64 = -273.15;
pub const ABSOLUTE_ZERO_F: f64 = -459.67;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    pub fn name(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
        }
    }

    fn absolute_zero(self) -> f64 {
        match self {
            Scale::Celsius => ABSOLUTE_ZERO_C,
            Scale::Fahrenheit => ABSOLUTE_ZERO_F,
            Scale::Kelvin => 0.0,
        }
    }

    /// Band outside of which a reading is worth a warning.
    fn usual_band(self) -> (f64, f64, &'static str) {
        match self {
            Scale::Celsius => (-100.0, 100.0, "Extreme temperature detected!"),
            Scale::Fahrenheit => (-148.0, 212.0, "Extreme temperature detected!"),
            Scale::Kelvin => (100.0, 500.0, "Atypical temperature detected!"),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "celsius" | "c" => Ok(Scale::Celsius),
            "fahrenheit" | "f" => Ok(Scale::Fahrenheit),
            "kelvin" | "k" => Ok(Scale::Kelvin),
            _ => Err(Error::InvalidArgument(format!(
                "unknown scale '{}', use Celsius, Fahrenheit or Kelvin",
                s.trim()
            ))),
        }
    }
}

/// Outcome of a successful conversion plus its non-fatal advisory.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub scale: Scale,
    pub advisory: Option<&'static str>,
}

/// A completed conversion, kept for the history view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: f64,
    pub from: Scale,
    pub to: Scale,
    pub result: f64,
}

/// Reject readings below absolute zero. The bound itself is accepted.
pub fn validate(value: f64, scale: Scale) -> Result<f64> {
    if value.is_nan() {
        return Err(Error::InvalidArgument("temperature is not a number".into()));
    }
    if value < scale.absolute_zero() {
        return Err(Error::PhysicalImpossibility { value, scale: scale.name() });
    }
    Ok(value)
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_kelvin(c: f64) -> f64 {
    c - ABSOLUTE_ZERO_C
}

pub fn kelvin_to_celsius(k: f64) -> f64 {
    k + ABSOLUTE_ZERO_C
}

fn to_celsius(value: f64, from: Scale) -> f64 {
    match from {
        Scale::Celsius => value,
        Scale::Fahrenheit => fahrenheit_to_celsius(value),
        Scale::Kelvin => kelvin_to_celsius(value),
    }
}

fn from_celsius(c: f64, to: Scale) -> f64 {
    match to {
        Scale::Celsius => c,
        Scale::Fahrenheit => celsius_to_fahrenheit(c),
        Scale::Kelvin => celsius_to_kelvin(c),
    }
}

/// Validate `value` on its own scale, then convert. Cannot fail after validation.
pub fn convert(value: f64, from: Scale, to: Scale) -> Result<Reading> {
    let value = validate(value, from)?;
    let converted = if from == to { value } else { from_celsius(to_celsius(value, from), to) };
    Ok(Reading {
        value: converted,
        scale: to,
        advisory: advisory(converted, to),
    })
}

/// Name-based entry point for callers holding scale strings.
pub fn convert_named(value: f64, from: &str, to: &str) -> Result<Reading> {
    convert(value, from.parse()?, to.parse()?)
}

/// Warning text for readings outside the usual band of `scale`.
pub fn advisory(value: f64, scale: Scale) -> Option<&'static str> {
    let (lo, hi, message) = scale.usual_band();
    (value < lo || value > hi).then_some(message)
}
