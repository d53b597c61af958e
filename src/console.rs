use std::io::{BufRead, Write};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::car::Car;
use crate::race::RaceResult;

pub const NAMES_PROMPT: &str = "Enter the car names, separated by commas:";
pub const ROUNDS_PROMPT: &str = "How many rounds will be raced?";
pub const RESULTS_HEADER: &str = "Race results";
pub const NO_WINNER_MESSAGE: &str = "There is no final winner.";
const WINNER_PREFIX: &str = "Final winner : ";
const WINNER_SEPARATOR: &str = ", ";
const MOVE_MARKER: &str = "-";
const NAME_SEPARATOR: char = ',';

/// Where the raw user input comes from. Reads can fail (closed stdin);
/// that is a boundary failure, not a validation failure.
pub trait InputSource {
    /// One line of comma-separated names, split and trimmed. Empty
    /// tokens are kept so validation can reject them.
    fn read_names(&mut self) -> Result<Vec<String>>;

    /// The raw round-count token.
    fn read_round_count(&mut self) -> Result<String>;
}

/// Where the race transcript goes. Rendering never fails.
pub trait Output {
    fn progress(&mut self, name: &str, distance: u32);
    fn message(&mut self, text: &str);
    fn winner(&mut self, result: &RaceResult);
}

pub fn split_names(line: &str) -> Vec<String> {
    line.split(NAME_SEPARATOR)
        .map(|token| token.trim().to_string())
        .collect()
}

pub fn format_progress(name: &str, distance: u32) -> String {
    format!("{name} : {}", MOVE_MARKER.repeat(distance as usize))
}

pub fn format_winner(result: &RaceResult) -> String {
    if result.has_winner() {
        let names: Vec<&str> = result.winners().iter().map(Car::name).collect();
        format!("{WINNER_PREFIX}{}", names.join(WINNER_SEPARATOR))
    } else {
        NO_WINNER_MESSAGE.to_string()
    }
}

/// Prompts on stdout and reads line-wise from stdin.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    fn read_line(prompt: &str) -> Result<String> {
        println!("{prompt}");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(eyre!("standard input closed"));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl InputSource for ConsoleInput {
    fn read_names(&mut self) -> Result<Vec<String>> {
        Ok(split_names(&Self::read_line(NAMES_PROMPT)?))
    }

    fn read_round_count(&mut self) -> Result<String> {
        Self::read_line(ROUNDS_PROMPT)
    }
}

#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn progress(&mut self, name: &str, distance: u32) {
        println!("{}", format_progress(name, distance));
    }

    fn message(&mut self, text: &str) {
        println!("{text}");
    }

    fn winner(&mut self, result: &RaceResult) {
        println!("{}", format_winner(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::calculate_winners;

    #[test]
    fn progress_renders_one_marker_per_unit() {
        assert_eq!(format_progress("pobi", 3), "pobi : ---");
        assert_eq!(format_progress("woni", 0), "woni : ");
    }

    #[test]
    fn winner_line_joins_tied_names() {
        let mut cars = vec![Car::new("pobi"), Car::new("woni")];
        cars[0].advance(9);
        cars[1].advance(9);

        let result = calculate_winners(&cars);
        assert_eq!(format_winner(&result), "Final winner : pobi, woni");
    }

    #[test]
    fn winner_line_without_a_winner() {
        let cars = vec![Car::new("pobi")];
        let result = calculate_winners(&cars);
        assert_eq!(format_winner(&result), NO_WINNER_MESSAGE);
    }

    #[test]
    fn split_names_trims_and_keeps_empty_tokens() {
        assert_eq!(split_names("pobi, woni ,jun"), vec!["pobi", "woni", "jun"]);
        assert_eq!(split_names("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_names(""), vec![""]);
    }
}
