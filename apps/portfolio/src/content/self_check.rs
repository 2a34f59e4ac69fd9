//! Advisory shape check over the compiled-in content.
//!
//! Violations are reported, never enforced: the content is trusted literal data,
//! so a failing rule (or a bug in the check itself) must not keep the page from
//! rendering.

use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use tracing::{debug, warn};

use crate::content::ContentRepository;

const MIN_WORK_HISTORY: usize = 3;
const MIN_EDUCATION: usize = 3;
const MIN_NOTES: usize = 1;
const MIN_LEAD_RESPONSIBILITIES: usize = 5;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntegrityViolation {
    pub rule: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntegrityReport {
    pub passed: bool,
    pub violations: Vec<IntegrityViolation>,
}

impl From<Vec<IntegrityViolation>> for IntegrityReport {
    fn from(violations: Vec<IntegrityViolation>) -> Self {
        Self {
            passed: violations.is_empty(),
            violations,
        }
    }
}

fn violation(rule: &'static str, message: String) -> IntegrityViolation {
    IntegrityViolation { rule, message }
}

/// Pure check: returns every rule the repository breaks, in rule order.
pub fn check_integrity(repo: &ContentRepository) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();

    if repo.work_history.len() < MIN_WORK_HISTORY {
        violations.push(violation(
            "work_history_count",
            format!(
                "Expected at least {MIN_WORK_HISTORY} experience items, found {}",
                repo.work_history.len()
            ),
        ));
    }

    if repo.education.len() < MIN_EDUCATION {
        violations.push(violation(
            "education_count",
            format!(
                "Expected at least {MIN_EDUCATION} education/cert items, found {}",
                repo.education.len()
            ),
        ));
    }

    if repo.notes.len() < MIN_NOTES {
        violations.push(violation(
            "notes_count",
            format!("Expected at least {MIN_NOTES} additional info item, found 0"),
        ));
    }

    let lead = repo
        .work_history
        .first()
        .map(|e| e.responsibilities.len())
        .unwrap_or(0);
    if lead < MIN_LEAD_RESPONSIBILITIES {
        violations.push(violation(
            "lead_role_responsibilities",
            format!(
                "Expected first role to contain the full bullet set ({MIN_LEAD_RESPONSIBILITIES}+ bullets), found {lead}"
            ),
        ));
    }

    for (idx, entry) in repo.work_history.iter().enumerate() {
        if entry.responsibilities.is_empty() {
            violations.push(violation(
                "empty_responsibilities",
                format!(
                    "Experience item {idx} ({}) lists no responsibilities",
                    entry.organization
                ),
            ));
        }
    }

    violations
}

/// Runs [`check_integrity`] and logs the outcome. See [`run_guarded`].
pub fn run_self_check(repo: &ContentRepository) -> IntegrityReport {
    run_guarded(|| check_integrity(repo))
}

/// Runs a check, logging each violation as a warning.
///
/// A panic inside `check` is caught, logged and discarded; the caller gets a
/// passing empty report rather than an unwinding stack.
pub fn run_guarded<F>(check: F) -> IntegrityReport
where
    F: FnOnce() -> Vec<IntegrityViolation>,
{
    let violations = match panic::catch_unwind(AssertUnwindSafe(check)) {
        Ok(violations) => violations,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!("Content self-check aborted and was skipped: {reason}");
            Vec::new()
        }
    };

    for v in &violations {
        warn!(rule = v.rule, "Content self-check: {}", v.message);
    }
    if violations.is_empty() {
        debug!("Content self-check passed");
    }

    IntegrityReport::from(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::{NoteEntry, WorkHistoryEntry};

    fn make_role(org: &str, bullets: usize) -> WorkHistoryEntry {
        WorkHistoryEntry {
            organization: org.to_string(),
            title_line: "Manager".to_string(),
            location_line: "Toronto, ON".to_string(),
            date_range: "2020 – 2021".to_string(),
            responsibilities: (0..bullets).map(|i| format!("Bullet {i}")).collect(),
        }
    }

    fn rules(violations: &[IntegrityViolation]) -> Vec<&'static str> {
        violations.iter().map(|v| v.rule).collect()
    }

    #[test]
    fn test_loaded_content_passes() {
        assert!(check_integrity(&ContentRepository::load()).is_empty());
    }

    #[test]
    fn test_empty_repository_reports_every_count_rule() {
        let repo = ContentRepository::new(vec![], vec![], vec![]);
        assert_eq!(
            rules(&check_integrity(&repo)),
            vec![
                "work_history_count",
                "education_count",
                "notes_count",
                "lead_role_responsibilities"
            ]
        );
    }

    #[test]
    fn test_thin_lead_role_is_flagged() {
        let mut repo = ContentRepository::load();
        repo.work_history[0] = make_role("Sun Life Financial", 4);
        let v = check_integrity(&repo);
        assert_eq!(rules(&v), vec!["lead_role_responsibilities"]);
        assert!(v[0].message.contains("found 4"));
    }

    #[test]
    fn test_role_without_responsibilities_is_flagged() {
        let mut repo = ContentRepository::load();
        repo.work_history.push(make_role("Acme", 0));
        let v = check_integrity(&repo);
        assert_eq!(rules(&v), vec!["empty_responsibilities"]);
        assert!(v[0].message.contains("Acme"));
    }

    #[test]
    fn test_missing_notes_only() {
        let mut repo = ContentRepository::load();
        repo.notes.clear();
        assert_eq!(rules(&check_integrity(&repo)), vec!["notes_count"]);
    }

    #[test]
    fn test_run_self_check_report_mirrors_violations() {
        let repo = ContentRepository::new(
            vec![make_role("A", 6)],
            vec![],
            vec![NoteEntry("x".to_string())],
        );
        let report = run_self_check(&repo);
        assert!(!report.passed);
        assert_eq!(
            rules(&report.violations),
            vec!["work_history_count", "education_count"]
        );
    }

    #[test]
    fn test_panicking_check_is_swallowed() {
        let report = run_guarded(|| -> Vec<IntegrityViolation> { panic!("broken rule") });
        assert!(report.passed);
        assert!(report.violations.is_empty());
    }
}
