use clap::{CommandFactory, Parser};
use clap_complete::generate;
mod cli;
use crate::cli::{command::Command, config::ConfigCommands};


#[derive(Parser, Debug)]
#[command(term_width = 0)]
#[command(name = "SolWallet")]
#[command(version = option_env!("BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")))]
#[command(about = "SolWallet keypair tool", long_about = None)]
struct App {
    #[command(subcommand)]
    command: Command,
}

fn main() -> eyre::Result<()> {
    env_logger::init();
    let app = App::parse();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let res = match app.command {
        Command::Export(args) => args.execute(&mut handle),
        Command::Address(args) => args.execute(&mut handle),
        Command::Keygen(args) => args.execute(&mut handle),
        Command::Config(command) => match command.command {
            ConfigCommands::Get(args) => args.execute(&mut handle),
            ConfigCommands::Set(args) => args.execute(&mut handle),
        },
        Command::Completion(args) => {
            let mut cmd = App::command();
            generate(args.shell, &mut cmd, "solwallet", &mut std::io::stdout());
            Ok(())
        }
    };

    match res {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    Ok(())
}
