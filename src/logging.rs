/// Logger setup.  The games own the terminal, so log lines only go to a file
/// unless `RUST_LOG` explicitly asks for stderr output.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub fn init(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}
