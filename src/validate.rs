use std::collections::HashSet;

use thiserror::Error;

pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 200;

/// Everything that can be wrong with the user's input. Always recovered
/// by re-prompting, never by terminating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate car names are not allowed")]
    DuplicateName,
    #[error("car names must not be empty")]
    EmptyName,
    #[error("the round count must be a number")]
    NotANumber,
    #[error("the round count must be between {min} and {max}", min = MIN_ROUNDS, max = MAX_ROUNDS)]
    OutOfRange,
}

pub fn check_names(names: &[String]) -> Result<(), ValidationError> {
    if names.is_empty() || names.iter().any(String::is_empty) {
        return Err(ValidationError::EmptyName);
    }

    let distinct: HashSet<&str> = names.iter().map(String::as_str).collect();
    if distinct.len() != names.len() {
        return Err(ValidationError::DuplicateName);
    }

    Ok(())
}

pub fn parse_round_count(token: &str) -> Result<u32, ValidationError> {
    // Signed parse first: "-3" is a number out of range, not a non-number.
    let rounds: i64 = token
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;
    if rounds < i64::from(MIN_ROUNDS) || rounds > i64::from(MAX_ROUNDS) {
        return Err(ValidationError::OutOfRange);
    }

    Ok(rounds as u32)
}
