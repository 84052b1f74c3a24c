use clap::Args;
use solwallet_sdk::{
    default_keypair_path, encode_keypair_bytes, load_keypair_bytes, read_solwallet_config,
};
use std::{io::Write, path::PathBuf};

#[derive(Args, Debug)]
pub struct ExportCliCommand {
    /// Path to the keypair file to export
    #[arg(long)]
    pub keypair: Option<PathBuf>,
}

impl ExportCliCommand {
    /// Print the keypair's raw bytes as a Base58 string.
    ///
    /// Writes exactly one line on success and nothing at all on failure.
    pub fn execute<W: Write>(self, out: &mut W) -> eyre::Result<()> {
        let (_, config) = read_solwallet_config()?;
        let loaded = load_keypair_bytes(
            self.keypair,
            Some(config.keypair_path),
            default_keypair_path(),
        )?;

        writeln!(
            out,
            "Base58 Private Key: {}",
            encode_keypair_bytes(&loaded.bytes)
        )?;

        Ok(())
    }
}
