use std::io::{self, BufRead, Write};

use rand::Rng;

use super::{run_menu, Console};
use crate::game::{Game, Hint, Scoreboard, SECRET_RANGE};
use crate::parser;

const OPTIONS: &[&str] = &["Play a round", "Show personal best"];

pub fn run<R: BufRead, W: Write, G: Rng>(console: &mut Console<R, W>, rng: &mut G) -> io::Result<()> {
    let mut board = Scoreboard::default();

    run_menu(console, "Guess the Number", OPTIONS, |console, choice| {
        if choice == 2 {
            return match board.best() {
                Some(best) => console.say(format_args!("Best: {best} attempts over {} rounds.", board.rounds())),
                None => console.say("No rounds finished yet."),
            };
        }

        let mut game = Game::new(&mut *rng);
        console.say(format_args!(
            "I'm thinking of a number from {} to {}.",
            SECRET_RANGE.start(),
            SECRET_RANGE.end()
        ))?;
        if let Some(best) = board.best() {
            console.say(format_args!("Record to beat: {best} attempts."))?;
        }

        while !game.is_solved() {
            let prompt = format!("Attempt #{} -> your number: ", game.attempts() + 1);
            let Some(n) = console.ask(&prompt, |s| {
                let n = parser::parse_integer(s)?;
                u32::try_from(n).map_err(|_| crate::error::Error::validation("guess", format!("{n} is negative")))
            })?
            else {
                return Ok(());
            };

            match game.guess(n) {
                Ok(Hint::Higher) => console.say(format_args!("It's HIGHER than {n}."))?,
                Ok(Hint::Lower) => console.say(format_args!("It's LOWER than {n}."))?,
                Ok(Hint::Correct) => {
                    console.say(format_args!("Correct! The number was {}.", game.secret()))?;
                    console.say(format_args!("It took you {} attempts.", game.attempts()))?;
                }
                Err(e) => console.say(format_args!("Error: {e}"))?,
            }
        }

        if board.finish_round(game.attempts()) {
            console.say("NEW RECORD!")
        } else {
            console.say(format_args!("Your best is still {} attempts.", board.best().unwrap_or_default()))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::drive;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn binary_search_always_wins() {
        let mut rng = StdRng::seed_from_u64(11);
        let secret = Game::new(&mut StdRng::seed_from_u64(11)).secret();

        // halve the interval with each guess using the hints we know are coming
        let (mut lo, mut hi) = (1u32, 100u32);
        let mut script = String::from("1\n");
        loop {
            let mid = (lo + hi) / 2;
            script.push_str(&format!("{mid}\n"));
            if mid == secret {
                break;
            }
            if mid < secret { lo = mid + 1 } else { hi = mid - 1 }
        }
        script.push_str("2\n0\n");

        let out = drive(&script, |c| run(c, &mut rng));
        assert!(out.contains(&format!("Correct! The number was {secret}.")));
        assert!(out.contains("NEW RECORD!"));
        assert!(out.contains("over 1 rounds."));
    }

    #[test]
    fn junk_and_out_of_range_guesses() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = drive("1\nfifty\n0\n-4\n", |c| run(c, &mut rng));
        assert!(out.contains("Error: could not parse 'fifty' as a whole number"));
        assert!(out.contains("Error: invalid guess: 0 is outside 1..=100"));
        assert!(out.contains("Error: invalid guess: -4 is negative"));
        assert!(out.contains("Attempt #1"));
        assert!(!out.contains("Attempt #2"));
    }
}
