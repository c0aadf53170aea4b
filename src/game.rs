use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};

pub const SECRET_RANGE: RangeInclusive<u32> = 1..=100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// The secret is greater than the guess.
    Higher,
    /// The secret is smaller than the guess.
    Lower,
    Correct,
}

/// One round of the guessing game.
#[derive(Debug, Clone)]
pub struct Game {
    secret: u32,
    attempts: u32,
    solved: bool,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_secret(rng.gen_range(SECRET_RANGE))
    }

    pub fn with_secret(secret: u32) -> Self {
        debug!(secret, "new round");
        Self { secret, attempts: 0, solved: false }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// Out-of-range guesses are rejected and do not count as attempts.
    pub fn guess(&mut self, n: u32) -> Result<Hint> {
        if !SECRET_RANGE.contains(&n) {
            return Err(Error::validation(
                "guess",
                format!("{n} is outside {}..={}", SECRET_RANGE.start(), SECRET_RANGE.end()),
            ));
        }
        self.attempts += 1;
        let hint = match n.cmp(&self.secret) {
            std::cmp::Ordering::Less => Hint::Higher,
            std::cmp::Ordering::Greater => Hint::Lower,
            std::cmp::Ordering::Equal => {
                self.solved = true;
                Hint::Correct
            }
        };
        Ok(hint)
    }
}

/// Personal best across rounds.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    best: Option<u32>,
    rounds: u32,
}

impl Scoreboard {
    pub fn best(&self) -> Option<u32> {
        self.best
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns true when `attempts` beats the previous best.
    pub fn finish_round(&mut self, attempts: u32) -> bool {
        self.rounds += 1;
        match self.best {
            Some(best) if attempts >= best => false,
            _ => {
                self.best = Some(attempts);
                true
            }
        }
    }
}
