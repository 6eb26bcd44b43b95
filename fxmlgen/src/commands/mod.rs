mod check;
mod clean;
mod generate;
mod list;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use clean::CleanCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for fxmlgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "fxmlgen")]
#[command(version)]
#[command(about = "Generate a Java enum for the FXML views in your resources")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Discover FXML files and write the enum
    Generate(GenerateCommand),

    /// Validate fxmlgen.toml and the resource tree without writing
    Check(CheckCommand),

    /// List discovered FXML files
    List(ListCommand),

    /// Remove the generated enum
    Clean(CleanCommand),
}
