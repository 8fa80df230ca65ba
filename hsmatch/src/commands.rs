use clap::{Args, Subcommand};
use std::path::PathBuf;

mod demo;
mod run;

pub use demo::demo;
pub use run::run;

#[derive(Subcommand)]
pub enum Commands {
    /// Run a full matching pass and write the assignment report
    Run {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Write sample applicant and apartment tables
    Demo {
        #[command(flatten)]
        args: DemoArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// An optional TOML configuration file
    #[arg(short, long, env = "HSM_CONFIG")]
    pub config: Option<PathBuf>,

    /// The applicant table ("-" implies stdin)
    #[arg(short, long)]
    pub people: Option<PathBuf>,

    /// The apartment listing ("-" implies stdin)
    #[arg(short, long)]
    pub apartments: Option<PathBuf>,

    /// The assignment report ("-" implies stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail instead of writing sample applicants when the applicant table is missing
    #[arg(long)]
    pub no_bootstrap: bool,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// The directory to write the tables into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Generate this many random applicants instead of the canonical four
    #[arg(short, long)]
    pub random: Option<usize>,

    /// The seed for random applicants
    #[arg(short, long, default_value_t = 0, requires = "random")]
    pub seed: u64,
}
