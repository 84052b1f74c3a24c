use clap::Args;
use solwallet_sdk::{read_solwallet_config, write_solwallet_config};
use std::{io::Write, path::PathBuf};

#[derive(Args, Debug)]
pub struct SetConfigCliCommand {
    #[arg(long, help = "Keypair of the user")]
    pub keypair: PathBuf,
}

impl SetConfigCliCommand {
    pub fn execute<W: Write>(self, out: &mut W) -> eyre::Result<()> {
        let (filename, mut config) = read_solwallet_config()?;
        config.keypair_path = self.keypair;

        write_solwallet_config(&config)?;

        writeln!(
            out,
            "Config File: {}\nKeypair Path: {}",
            filename.display(),
            config.keypair_path.display()
        )?;

        Ok(())
    }
}
