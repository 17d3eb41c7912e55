use anyhow::Result;
use env_logger::Env;

use device_header::command;
use device_header::constants::{defaults, envvars};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    // No flags or positional arguments are accepted
    let args = pico_args::Arguments::from_env();
    let unexpected = args.finish();
    if !unexpected.is_empty() {
        return Err(anyhow::anyhow!("Unexpected arguments: {:?}", unexpected));
    }

    command::generate()?;
    Ok(())
}
