use clap::Parser;

pub mod bootstrap;
pub mod loader;
pub mod report;

mod config;
pub use config::{AppConfig, BootstrapConfig, InputConfig, OutputConfig};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Run { args } => run(&args),
            Commands::Demo { args } => demo(&args),
        }
    }
}
