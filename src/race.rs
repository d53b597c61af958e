use serde::Serialize;

use crate::car::Car;
use crate::console::Output;
use crate::log::RoundLog;
use crate::steps::StepSource;

/// The race engine: owns the cars for the duration of the race and
/// records a per-round transcript as it runs.
#[derive(Debug)]
pub struct Race {
    cars: Vec<Car>,
    log: Vec<RoundLog>,
}

impl Race {
    /// Callers hand over a non-empty, already validated car list.
    pub fn new(cars: Vec<Car>) -> Self {
        Self {
            cars,
            log: Vec::new(),
        }
    }

    /// Runs `rounds` rounds. Each round gives every car, in
    /// registration order, one independent draw; a blank line closes
    /// the round. The round count is pre-validated by the caller.
    pub fn run(&mut self, rounds: u32, steps: &mut dyn StepSource, output: &mut dyn Output) {
        for round in 1..=rounds {
            for car in &mut self.cars {
                car.advance(steps.draw());
                output.progress(car.name(), car.distance());
            }
            output.message("");
            self.log.push(RoundLog::capture(round, &self.cars));
        }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn log(&self) -> &[RoundLog] {
        &self.log
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RaceResult {
    winners: Vec<Car>,
}

impl RaceResult {
    pub fn has_winner(&self) -> bool {
        !self.winners.is_empty()
    }

    pub fn winners(&self) -> &[Car] {
        &self.winners
    }
}

/// A car wins by ending at the maximum distance; ties produce multiple
/// winners in their original order. A race where nobody moved at all
/// has no winner, even though every car is tied at zero.
pub fn calculate_winners(cars: &[Car]) -> RaceResult {
    let max_distance = cars.iter().map(Car::distance).max().unwrap_or(0);
    if max_distance == 0 {
        return RaceResult {
            winners: Vec::new(),
        };
    }

    RaceResult {
        winners: cars
            .iter()
            .filter(|car| car.distance() == max_distance)
            .cloned()
            .collect(),
    }
}
