use clap::Args;
use solana_sdk::signer::Signer;
use solwallet_sdk::create_new_keypair;
use std::{io::Write, path::PathBuf};

#[derive(Args, Debug)]
pub struct KeyGenCliCommand {
    #[arg(short, default_value = "false", help = "Force keypair generation")]
    pub force: bool,
    /// Write the keypair to this path instead of the configured one
    #[arg(long)]
    pub outfile: Option<PathBuf>,
}

impl KeyGenCliCommand {
    pub fn execute<W: Write>(self, out: &mut W) -> eyre::Result<()> {
        let keypair = create_new_keypair(self.force, self.outfile)?;
        writeln!(out, "Pubkey: {}", keypair.pubkey())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solwallet_sdk::parse_keypair_json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_keygen_writes_loadable_keypair() {
        let tmp = TempDir::new().unwrap();
        let outfile = tmp.path().join("id.json");

        let mut output = Vec::new();
        KeyGenCliCommand {
            force: false,
            outfile: Some(outfile.clone()),
        }
        .execute(&mut output)
        .unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.starts_with("Pubkey: "));

        let contents = fs::read_to_string(&outfile).unwrap();
        let bytes = parse_keypair_json(&contents, "test").unwrap();
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn test_cli_keygen_refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let outfile = tmp.path().join("id.json");

        let mut output = Vec::new();
        KeyGenCliCommand {
            force: false,
            outfile: Some(outfile.clone()),
        }
        .execute(&mut output)
        .unwrap();

        let err = KeyGenCliCommand {
            force: false,
            outfile: Some(outfile.clone()),
        }
        .execute(&mut Vec::new())
        .unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let first = fs::read_to_string(&outfile).unwrap();

        KeyGenCliCommand {
            force: true,
            outfile: Some(outfile.clone()),
        }
        .execute(&mut Vec::new())
        .unwrap();

        let second = fs::read_to_string(&outfile).unwrap();
        assert_ne!(first, second);
    }
}
