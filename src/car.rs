use serde::Serialize;

/// A draw at or above this value moves the car one unit.
pub const MOVE_THRESHOLD: u8 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct Car {
    name: String,
    distance: u32,
}

impl Car {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            distance: 0,
        }
    }

    /// Moves one unit when `step` meets the threshold, otherwise stays
    /// put. Distance never decreases.
    pub fn advance(&mut self, step: u8) {
        if step >= MOVE_THRESHOLD {
            self.distance += 1;
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn distance(&self) -> u32 {
        self.distance
    }
}
