// src/bin/cli.rs
use phish_lens::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log_guard = log::init(None);
    cli::run()?;
    Ok(())
}
