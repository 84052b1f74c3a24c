use clap::Args;
use solana_sdk::{signature::Keypair, signer::Signer};
use solwallet_sdk::{
    default_keypair_path, load_keypair_bytes, read_solwallet_config, KeypairLoadError,
};
use std::{io::Write, path::PathBuf};

#[derive(Args, Debug)]
pub struct AddressCliCommand {
    /// Path to the keypair file
    #[arg(long)]
    pub keypair: Option<PathBuf>,
}

impl AddressCliCommand {
    /// Print the public key of the keypair.
    ///
    /// This is the only operation that interprets the file's bytes as a
    /// signing key, so it requires the full 64-byte keypair.
    pub fn execute<W: Write>(self, out: &mut W) -> eyre::Result<()> {
        let (_, config) = read_solwallet_config()?;
        let loaded = load_keypair_bytes(
            self.keypair,
            Some(config.keypair_path),
            default_keypair_path(),
        )?;

        let keypair = Keypair::from_bytes(&loaded.bytes).map_err(|_| {
            KeypairLoadError::InvalidKeypairBytes {
                origin: loaded.source.to_string(),
                len: loaded.bytes.len(),
            }
        })?;

        writeln!(out, "{}", keypair.pubkey())?;

        Ok(())
    }
}
