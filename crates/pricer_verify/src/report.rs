//! Harness run report.
//!
//! Each check family produces its own report; [`HarnessReport`] collects
//! them in run order together with the fatal error that stopped the run,
//! if any. The `Display` output is what the CLI prints.

use std::fmt;

use crate::diversity::DiversityReport;
use crate::error::VerifyError;
use crate::fuzzing::FuzzReport;
use crate::monotonicity::MonotonicityReport;

/// The three check families, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckFamily {
    /// Spot and expiry sweeps
    Monotonicity,
    /// Farthest-from-centroid case selection
    DiversitySelection,
    /// Seeded random trials
    RandomizedFuzzing,
}

impl CheckFamily {
    /// All families in run order.
    pub const ALL: [CheckFamily; 3] = [
        CheckFamily::Monotonicity,
        CheckFamily::DiversitySelection,
        CheckFamily::RandomizedFuzzing,
    ];
}

impl fmt::Display for CheckFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckFamily::Monotonicity => write!(f, "monotonicity sweep"),
            CheckFamily::DiversitySelection => write!(f, "diversity selection"),
            CheckFamily::RandomizedFuzzing => write!(f, "randomized fuzzing"),
        }
    }
}

/// Status tag printed at the start of each family line.
pub(crate) fn status_tag(passed: bool) -> &'static str {
    if passed {
        "[PASS]"
    } else {
        "[FAIL]"
    }
}

/// Outcome of a full harness run.
///
/// A family report is `None` when the family did not run because an
/// earlier one hit a fatal error, recorded in `abort`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarnessReport {
    /// Monotonicity sweep outcome
    pub monotonicity: Option<MonotonicityReport>,
    /// Diversity selection outcome
    pub diversity: Option<DiversityReport>,
    /// Fuzzing outcome
    pub fuzzing: Option<FuzzReport>,
    /// Fatal error that stopped the run
    pub abort: Option<VerifyError>,
}

impl HarnessReport {
    /// Returns true when every family ran and passed.
    pub fn all_passed(&self) -> bool {
        self.abort.is_none()
            && self.monotonicity.is_some()
            && self.diversity.as_ref().is_some_and(DiversityReport::passed)
            && self.fuzzing.as_ref().is_some_and(FuzzReport::passed)
    }

    /// Families that did not run.
    pub fn skipped(&self) -> Vec<CheckFamily> {
        CheckFamily::ALL
            .into_iter()
            .filter(|family| !self.ran(*family) && self.aborted_in() != Some(*family))
            .collect()
    }

    fn ran(&self, family: CheckFamily) -> bool {
        match family {
            CheckFamily::Monotonicity => self.monotonicity.is_some(),
            CheckFamily::DiversitySelection => self.diversity.is_some(),
            CheckFamily::RandomizedFuzzing => self.fuzzing.is_some(),
        }
    }

    fn aborted_in(&self) -> Option<CheckFamily> {
        self.abort.as_ref().and_then(VerifyError::family)
    }
}

impl fmt::Display for HarnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for family in CheckFamily::ALL {
            match family {
                CheckFamily::Monotonicity => {
                    if let Some(report) = &self.monotonicity {
                        write!(f, "{}", report)?;
                    }
                }
                CheckFamily::DiversitySelection => {
                    if let Some(report) = &self.diversity {
                        write!(f, "{}", report)?;
                    }
                }
                CheckFamily::RandomizedFuzzing => {
                    if let Some(report) = &self.fuzzing {
                        write!(f, "{}", report)?;
                    }
                }
            }
            if self.aborted_in() == Some(family) {
                if let Some(err) = &self.abort {
                    writeln!(f, "{} {}: {}", status_tag(false), family, err)?;
                }
            }
        }
        for family in self.skipped() {
            writeln!(f, "[SKIP] {}: not run", family)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monotonicity::MonotonicityReport;

    fn sweep() -> MonotonicityReport {
        MonotonicityReport {
            spot_points: 11,
            expiry_points: 10,
        }
    }

    #[test]
    fn test_family_display() {
        assert_eq!(CheckFamily::Monotonicity.to_string(), "monotonicity sweep");
        assert_eq!(CheckFamily::DiversitySelection.to_string(), "diversity selection");
        assert_eq!(CheckFamily::RandomizedFuzzing.to_string(), "randomized fuzzing");
    }

    #[test]
    fn test_empty_report_has_not_passed() {
        let report = HarnessReport::default();
        assert!(!report.all_passed());
        assert_eq!(report.skipped(), CheckFamily::ALL.to_vec());
    }

    #[test]
    fn test_abort_renders_fail_and_skips() {
        let report = HarnessReport {
            monotonicity: Some(sweep()),
            abort: Some(VerifyError::InvariantViolation {
                family: CheckFamily::RandomizedFuzzing,
                message: "negative price".to_string(),
            }),
            ..Default::default()
        };
        assert!(!report.all_passed());
        assert_eq!(report.skipped(), vec![CheckFamily::DiversitySelection]);

        let text = report.to_string();
        assert!(text.contains("[PASS] monotonicity sweep"));
        assert!(text.contains("[FAIL] randomized fuzzing: Invariant violated"));
        assert!(text.contains("[SKIP] diversity selection"));
    }
}
