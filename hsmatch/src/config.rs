//! Application configuration management.
//!
//! Configuration is merged from multiple sources with a clear precedence
//! order: default values, an optional configuration file, environment
//! variables and finally command-line flags.

use crate::RunArgs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// Where the applicant and apartment tables are read from
    #[serde(default)]
    pub input: InputConfig,

    /// Where the assignment table is written
    #[serde(default)]
    pub output: OutputConfig,

    /// What to do when the applicant table is missing
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

/// Input tables
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct InputConfig {
    /// The applicant table ("-" implies stdin)
    #[serde(default = "default_people")]
    pub people: PathBuf,

    /// The apartment listing ("-" implies stdin)
    #[serde(default = "default_apartments")]
    pub apartments: PathBuf,

    /// The separator between window directions in the apartment listing
    #[serde(default = "default_direction_delimiter")]
    pub direction_delimiter: String,
}

fn default_people() -> PathBuf {
    "peoplec.csv".into()
}

fn default_apartments() -> PathBuf {
    "apartment_data.csv".into()
}

fn default_direction_delimiter() -> String {
    ";".to_owned()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            people: default_people(),
            apartments: default_apartments(),
            direction_delimiter: default_direction_delimiter(),
        }
    }
}

/// Output table
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    /// The assignment table ("-" implies stdout)
    #[serde(default = "default_output")]
    pub path: PathBuf,
}

fn default_output() -> PathBuf {
    "bidding_assignments.csv".into()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output(),
        }
    }
}

/// Bootstrapping behavior
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BootstrapConfig {
    /// Write the sample applicant table if the configured one does not exist
    #[serde(default = "default_bootstrap_people")]
    pub people: bool,
}

fn default_bootstrap_people() -> bool {
    true
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            people: default_bootstrap_people(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file, if given
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `HSM_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Read applicants from a different file
    /// export HSM_INPUT__PEOPLE="applicants.csv"
    ///
    /// # Never create a sample applicant table
    /// export HSM_BOOTSTRAP__PEOPLE=false
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps HSM_INPUT__PEOPLE to input.people
        config = config.add_source(
            config::Environment::with_prefix("HSM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }

    /// Apply the command-line flags on top of the loaded configuration
    pub fn with_args(mut self, args: &RunArgs) -> Self {
        if let Some(people) = &args.people {
            self.input.people = people.clone();
        }
        if let Some(apartments) = &args.apartments {
            self.input.apartments = apartments.clone();
        }
        if let Some(output) = &args.output {
            self.output.path = output.clone();
        }
        if args.no_bootstrap {
            self.bootstrap.people = false;
        }
        self
    }
}
