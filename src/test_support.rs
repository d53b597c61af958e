//! Test doubles for the console and randomness seams.

use std::collections::VecDeque;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::console::{format_progress, format_winner, split_names, InputSource, Output};
use crate::race::RaceResult;
use crate::steps::StepSource;

/// Input boundary fed from a fixed list of raw lines. Running out of
/// lines behaves like a closed stdin.
#[derive(Debug)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_string()).collect(),
        }
    }

    fn next_line(&mut self) -> Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| eyre!("scripted input exhausted"))
    }
}

impl InputSource for ScriptedInput {
    fn read_names(&mut self) -> Result<Vec<String>> {
        Ok(split_names(&self.next_line()?))
    }

    fn read_round_count(&mut self) -> Result<String> {
        self.next_line()
    }
}

/// Output boundary that records the rendered transcript, one line per
/// emission, exactly as the console would print it.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

impl Output for RecordingOutput {
    fn progress(&mut self, name: &str, distance: u32) {
        self.lines.push(format_progress(name, distance));
    }

    fn message(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn winner(&mut self, result: &RaceResult) {
        self.lines.push(format_winner(result));
    }
}

/// Step source that replays a fixed list of draws.
#[derive(Debug)]
pub struct ScriptedSteps {
    steps: VecDeque<u8>,
}

impl ScriptedSteps {
    pub fn new(steps: &[u8]) -> Self {
        Self {
            steps: steps.iter().copied().collect(),
        }
    }
}

impl StepSource for ScriptedSteps {
    fn draw(&mut self) -> u8 {
        self.steps.pop_front().expect("scripted steps exhausted")
    }
}
