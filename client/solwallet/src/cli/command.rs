use super::config::ConfigCliCommand;
use clap::{Args, Subcommand};
use clap_complete::Shell;
use solwallet_cli::{
    address::AddressCliCommand, export::ExportCliCommand, keygen::KeyGenCliCommand,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export your private key as a Base58 string
    #[command(hide = false)]
    Export(ExportCliCommand),
    /// Get your public key
    #[command(hide = false)]
    Address(AddressCliCommand),
    /// Create a new keypair
    #[command(hide = false)]
    Keygen(KeyGenCliCommand),
    /// Local configuration
    #[command(hide = false)]
    Config(ConfigCliCommand),
    /// Generate shell completions
    #[command(hide = false)]
    Completion(CompletionCliCommand),
}

#[derive(Args, Debug, Clone)]
pub struct CompletionCliCommand {
    #[arg(value_enum)]
    pub shell: Shell,
}
