#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]

//! Console racing game: named cars advance on random draws for a fixed
//! number of rounds, and whoever travels furthest wins.

pub mod app;
pub mod car;
pub mod console;
pub mod log;
pub mod logging;
pub mod race;
pub mod steps;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validate;
