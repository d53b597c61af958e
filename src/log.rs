use serde::Serialize;

use crate::car::Car;

/// State of every car at the end of one round, in race order.
#[derive(Debug, Clone, Serialize)]
pub struct RoundLog {
    pub round: u32,
    pub cars: Vec<CarSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CarSnapshot {
    pub name: String,
    pub distance: u32,
}

impl RoundLog {
    pub fn capture(round: u32, cars: &[Car]) -> Self {
        Self {
            round,
            cars: cars
                .iter()
                .map(|car| CarSnapshot {
                    name: car.name().to_string(),
                    distance: car.distance(),
                })
                .collect(),
        }
    }
}
