//! Dodge: enemies spawn on the border and chase you; shoot them first.

use std::io::{stdout, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use terminal_shooters::config::{DodgeArgs, DodgeConfig};
use terminal_shooters::dodge::game::{self, Outcome};
use terminal_shooters::logging;
use terminal_shooters::term::{CrosstermKeys, RawMode};

fn main() -> Result<()> {
    let args = DodgeArgs::parse();
    logging::init(args.log_file.as_deref())?;
    let cfg = DodgeConfig::try_from(&args)?;

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut out = BufWriter::new(stdout());

    // The guard restores the terminal before anything below is printed.
    let outcome = {
        let mut keys = RawMode::acquire(CrosstermKeys).context("entering raw mode")?;
        let result = game::run(&cfg, &mut *keys, &mut out, &mut rng);
        result
    }?;

    match outcome {
        Outcome::Finished { score } => println!("\nGame Over! Final score: {score}"),
        Outcome::Interrupted => println!("\nGame terminated by user"),
    }
    Ok(())
}
