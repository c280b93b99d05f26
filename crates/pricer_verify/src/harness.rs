//! Harness orchestration.
//!
//! Runs monotonicity, diversity selection and fuzzing in that order.
//! A fatal error in one family is recorded in the report and the
//! remaining families are skipped.

use tracing::{error, info};

use crate::config::HarnessConfig;
use crate::diversity::run_diversity;
use crate::error::VerifyError;
use crate::fuzzing::run_fuzzing;
use crate::monotonicity::run_monotonicity;
use crate::report::HarnessReport;

/// Runs every check family.
///
/// # Errors
/// `VerifyError::Config` if the configuration fails validation; nothing
/// runs in that case. Failures during the run are reported through
/// [`HarnessReport`] instead.
///
/// # Examples
/// ```
/// use pricer_verify::config::HarnessConfig;
/// use pricer_verify::harness::run_harness;
///
/// let report = run_harness(&HarnessConfig::default()).unwrap();
/// assert!(report.all_passed());
/// println!("{}", report);
/// ```
pub fn run_harness(config: &HarnessConfig) -> Result<HarnessReport, VerifyError> {
    config.validate()?;

    let mut report = HarnessReport::default();

    match run_monotonicity(&config.monotonicity) {
        Ok(sweep) => report.monotonicity = Some(sweep),
        Err(err) => return Ok(aborted(report, err)),
    }

    let pool = config.diversity.pool();
    report.diversity = Some(run_diversity(&pool, config.diversity.top_n));

    match run_fuzzing(&config.fuzzing) {
        Ok(fuzz) => report.fuzzing = Some(fuzz),
        Err(err) => return Ok(aborted(report, err)),
    }

    info!(all_passed = report.all_passed(), "harness finished");
    Ok(report)
}

fn aborted(mut report: HarnessReport, err: VerifyError) -> HarnessReport {
    error!(error = %err, "harness aborted");
    report.abort = Some(err);
    report
}
