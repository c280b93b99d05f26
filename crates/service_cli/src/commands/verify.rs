//! Verify command implementation
//!
//! Runs the verification harness and prints its report.

use std::path::Path;

use pricer_verify::{run_harness, HarnessConfig, HarnessReport};
use tracing::info;

use crate::{CliError, Result};

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyOverrides {
    pub seed: Option<u64>,
    pub trials: Option<usize>,
    pub top_n: Option<usize>,
}

impl VerifyOverrides {
    /// Merges the overrides into `config`; CLI values win.
    pub fn apply(&self, config: &mut HarnessConfig) {
        if let Some(seed) = self.seed {
            config.fuzzing.seed = seed;
        }
        if let Some(trials) = self.trials {
            config.fuzzing.trials = trials;
        }
        if let Some(top_n) = self.top_n {
            config.diversity.top_n = top_n;
        }
    }
}

/// Loads the configuration file (defaults when absent) and applies overrides.
pub fn load_config(path: Option<&Path>, overrides: VerifyOverrides) -> Result<HarnessConfig> {
    let mut config = match path {
        Some(path) => {
            info!("Loading harness configuration from {}", path.display());
            HarnessConfig::from_file(path)?
        }
        None => HarnessConfig::default(),
    };
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn outcome(report: &HarnessReport) -> Result<()> {
    if report.all_passed() {
        return Ok(());
    }
    let reason = match &report.abort {
        Some(err) => err.to_string(),
        None => "one or more check families failed".to_string(),
    };
    Err(CliError::ChecksFailed(reason))
}

/// Run the verify command
pub fn run(path: Option<&Path>, overrides: VerifyOverrides) -> Result<()> {
    let config = load_config(path, overrides)?;
    info!(
        seed = config.fuzzing.seed,
        trials = config.fuzzing.trials,
        top_n = config.diversity.top_n,
        "Starting verification"
    );

    let report = run_harness(&config)?;
    print!("{}", report);
    outcome(&report)
}
