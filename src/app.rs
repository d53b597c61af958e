use color_eyre::Result;

use crate::car::Car;
use crate::console::{InputSource, Output, RESULTS_HEADER};
use crate::race::{calculate_winners, Race};
use crate::steps::StepSource;
use crate::validate;

/// Runs one full race session: prompt for cars and rounds, race, report.
pub fn run(
    input: &mut dyn InputSource,
    output: &mut dyn Output,
    steps: &mut dyn StepSource,
) -> Result<()> {
    let cars = prompt_cars(input, output)?;
    let rounds = prompt_rounds(input, output)?;

    let mut race = Race::new(cars);
    race.run(rounds, steps, output);

    output.message(RESULTS_HEADER);
    let result = calculate_winners(race.cars());
    output.winner(&result);

    let transcript = serde_json::json!({ "rounds": race.log(), "result": result });
    tracing::debug!(%transcript, "race finished");

    Ok(())
}

// Validation failures re-issue the same prompt with no attempt cap;
// only boundary failures (closed input) break the loop.
fn prompt_cars(input: &mut dyn InputSource, output: &mut dyn Output) -> Result<Vec<Car>> {
    loop {
        let names = input.read_names()?;
        match validate::check_names(&names) {
            Ok(()) => return Ok(names.into_iter().map(Car::new).collect()),
            Err(error) => output.message(&error.to_string()),
        }
    }
}

fn prompt_rounds(input: &mut dyn InputSource, output: &mut dyn Output) -> Result<u32> {
    loop {
        let token = input.read_round_count()?;
        match validate::parse_round_count(&token) {
            Ok(rounds) => return Ok(rounds),
            Err(error) => output.message(&error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::NO_WINNER_MESSAGE;
    use crate::test_support::{RecordingOutput, ScriptedInput, ScriptedSteps};

    const MOVE_MARKER_PROBE: char = '-';

    #[test]
    fn single_round_race_reports_the_sole_winner() {
        let mut input = ScriptedInput::new(&["pobi,woni", "1"]);
        let mut output = RecordingOutput::default();
        let mut steps = ScriptedSteps::new(&[7, 2]);

        run(&mut input, &mut output, &mut steps).expect("race should finish");

        assert_eq!(
            output.lines,
            vec![
                "pobi : -".to_string(),
                "woni : ".to_string(),
                String::new(),
                RESULTS_HEADER.to_string(),
                "Final winner : pobi".to_string(),
            ]
        );
    }

    #[test]
    fn race_where_nobody_moves_has_no_winner() {
        let mut input = ScriptedInput::new(&["a,b", "3"]);
        let mut output = RecordingOutput::default();
        let mut steps = ScriptedSteps::new(&[0, 1, 2, 3, 4, 0]);

        run(&mut input, &mut output, &mut steps).expect("race should finish");

        assert_eq!(
            output.lines.last().map(String::as_str),
            Some(NO_WINNER_MESSAGE)
        );
        assert!(output
            .lines
            .iter()
            .all(|line| !line.contains(MOVE_MARKER_PROBE)));
    }

    #[test]
    fn duplicate_names_are_reprompted_until_valid() {
        let mut input = ScriptedInput::new(&["pobi,pobi", "pobi,woni", "1"]);
        let mut output = RecordingOutput::default();
        let mut steps = ScriptedSteps::new(&[2, 2]);

        run(&mut input, &mut output, &mut steps).expect("race should finish");

        assert_eq!(output.lines[0], "duplicate car names are not allowed");
        assert_eq!(
            output.lines.last().map(String::as_str),
            Some(NO_WINNER_MESSAGE)
        );
    }

    #[test]
    fn invalid_round_counts_are_reprompted_until_valid() {
        let mut input = ScriptedInput::new(&["pobi,woni", "abc", "201", "1"]);
        let mut output = RecordingOutput::default();
        let mut steps = ScriptedSteps::new(&[9, 9]);

        run(&mut input, &mut output, &mut steps).expect("race should finish");

        assert_eq!(output.lines[0], "the round count must be a number");
        assert_eq!(
            output.lines[1],
            "the round count must be between 1 and 200"
        );
        assert_eq!(
            output.lines.last().map(String::as_str),
            Some("Final winner : pobi, woni")
        );
    }

    #[test]
    fn exhausted_input_is_a_boundary_failure_not_a_retry() {
        let mut input = ScriptedInput::new(&["pobi,pobi"]);
        let mut output = RecordingOutput::default();
        let mut steps = ScriptedSteps::new(&[]);

        let outcome = run(&mut input, &mut output, &mut steps);

        assert!(outcome.is_err());
        assert_eq!(output.lines, vec!["duplicate car names are not allowed"]);
    }
}
