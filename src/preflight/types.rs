//! Preflight check types and report.

use std::fmt::Write;

/// Result of a single preflight check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed.
    Pass,
    /// Check failed - preparation will fail.
    Fail,
    /// Optional item missing.
    Warn,
}

impl CheckResult {
    pub fn pass(name: &str) -> Self {
        Self::new(name, CheckStatus::Pass, None)
    }

    pub fn fail(name: &str, details: &str) -> Self {
        Self::new(name, CheckStatus::Fail, Some(details))
    }

    pub fn warn(name: &str, details: &str) -> Self {
        Self::new(name, CheckStatus::Warn, Some(details))
    }

    fn new(name: &str, status: CheckStatus, details: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            status,
            details: details.map(str::to_string),
        }
    }
}

/// Results of all preflight checks.
#[derive(Debug, Clone)]
pub struct PreflightReport {
    pub checks: Vec<CheckResult>,
}

impl PreflightReport {
    /// Returns true if no check failed. Warnings are allowed.
    pub fn all_passed(&self) -> bool {
        self.fail_count() == 0
    }

    pub fn fail_count(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    pub fn warn_count(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    /// Render the report as printed by [`PreflightReport::print`].
    pub fn render(&self) -> String {
        let mut out = String::from("=== Preflight Check Results ===\n\n");

        for check in &self.checks {
            let (icon, label) = match check.status {
                CheckStatus::Pass => ("✓", "PASS"),
                CheckStatus::Fail => ("✗", "FAIL"),
                CheckStatus::Warn => ("⚠", "WARN"),
            };
            let _ = write!(out, "  {} [{}] {}", icon, label, check.name);
            match &check.details {
                Some(details) => {
                    let _ = writeln!(out, ": {}", details);
                }
                None => out.push('\n'),
            }
        }

        let passed = self.count(CheckStatus::Pass);
        let _ = writeln!(out, "\nSummary: {}/{} passed", passed, self.checks.len());
        if self.fail_count() > 0 {
            let _ = writeln!(out, "         {} FAILED - preparation will not succeed", self.fail_count());
        }
        if self.warn_count() > 0 {
            let _ = writeln!(out, "         {} warnings", self.warn_count());
        }
        out
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }
}
