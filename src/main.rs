#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]

use color_eyre::Result;

use yeongam::console::{ConsoleInput, ConsoleOutput};
use yeongam::steps::RandomSteps;

fn main() -> Result<()> {
    color_eyre::install()?;
    yeongam::logging::init();

    let mut input = ConsoleInput::default();
    let mut output = ConsoleOutput::default();
    let mut steps = RandomSteps::new();
    yeongam::app::run(&mut input, &mut output, &mut steps)
}
