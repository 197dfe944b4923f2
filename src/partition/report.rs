//! Accumulated check results

use crate::error::{CollageError, Result, Violation};

/// Violations collected by one checking stage
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// `Ok` when empty, otherwise a validation failure carrying every violation
    pub fn into_validation_result(self) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        Err(CollageError::ValidationFailed {
            violations: self.violations,
        })
    }

    /// `Ok` when empty, otherwise a resolution failure carrying every violation
    pub fn into_resolution_result(self) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        Err(CollageError::ResolutionFailed {
            violations: self.violations,
        })
    }
}

impl FromIterator<Violation> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(path: &str) -> Violation {
        Violation::MissingPath {
            kind: "sprites".to_string(),
            path: path.to_string(),
            origin: "m.moduleconfig".to_string(),
        }
    }

    #[test]
    fn test_empty_report_is_ok() {
        assert!(ValidationReport::new().into_validation_result().is_ok());
        assert!(ValidationReport::new().into_resolution_result().is_ok());
    }

    #[test]
    fn test_report_keeps_every_violation() {
        let mut report: ValidationReport = [missing("A")].into_iter().collect();
        report.extend([missing("B"), missing("C")].into_iter().collect());
        assert_eq!(report.len(), 3);

        match report.into_resolution_result() {
            Err(CollageError::ResolutionFailed { violations }) => {
                assert_eq!(violations, vec![missing("A"), missing("B"), missing("C")]);
            }
            other => panic!("expected resolution failure, got {other:?}"),
        }
    }
}
