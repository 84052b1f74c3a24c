use clap::Args;
use solwallet_sdk::read_solwallet_config;
use std::io::Write;

#[derive(Args, Debug)]
pub struct GetConfigCliCommand {}

impl GetConfigCliCommand {
    pub fn execute<W: Write>(self, out: &mut W) -> eyre::Result<()> {
        let (filename, config) = read_solwallet_config()?;

        writeln!(
            out,
            "Config File: {}\nKeypair Path: {}",
            filename.display(),
            config.keypair_path.display()
        )?;

        Ok(())
    }
}
