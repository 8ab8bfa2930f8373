mod cli;

use std::{error::Error, io::Write};

use clap::Parser;
use cli::Cli;
use fileinspect::{Invocation, dispatch};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let invocation = Invocation::from(Cli::parse());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(&invocation, &mut out)?;
    out.flush()?;
    Ok(())
}
