//! Per-tag-key semantic validators.
//!
//! A `Registry` maps a `tagKey` string to a validator. Validators read only
//! the item's value and the precomputed line suffix, and only ever append
//! warnings. Keys without an entry are accepted silently.
//!
//! Adding a rule for a new key means writing a `Validator` and registering it
//! in `Registry::builtin`; the dispatch site does not change.

use crate::models::Report;
use std::collections::HashMap;
use tracing::trace;

/// `(value, line_info, report)`; must only call `report.warn`.
pub type Validator = fn(&str, &str, &mut Report);

pub const DATA_CLASSIFICATIONS: &[&str] = &["DCL1", "DCL2", "DCL3", "DCL4"];
pub const BUSINESS_GROUP_PREFIXES: &[&str] = &["gip", "eng", "ops", "fin"];
pub const ENVIRONMENTS: &[&str] = &["dev", "development", "staging", "stage", "prod", "production"];

const BUSINESS_GROUP_MIN_LEN: usize = 2;
const OWNING_GROUP_MIN_LEN: usize = 5;

pub struct Registry {
    rules: HashMap<&'static str, Validator>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registry with every built-in tag-key rule.
    pub fn builtin() -> Self {
        let mut r = Self::empty();
        r.register("Data Classification", data_classification);
        r.register("Business Groups", business_groups);
        r.register("Owning Business group", owning_business_group);
        r.register("Environment", environment);
        r
    }

    /// Install `validator` for `tag_key`, replacing any previous entry.
    pub fn register(&mut self, tag_key: &'static str, validator: Validator) {
        self.rules.insert(tag_key, validator);
    }

    pub fn contains(&self, tag_key: &str) -> bool {
        self.rules.contains_key(tag_key)
    }

    /// Run the rule registered for `tag_key`, if any.
    pub fn validate(&self, tag_key: &str, value: &str, line_info: &str, report: &mut Report) {
        if let Some(v) = self.rules.get(tag_key) {
            trace!(tag_key, "dispatching tag rule");
            v(value, line_info, report);
        }
    }
}

fn data_classification(value: &str, line_info: &str, report: &mut Report) {
    if !value.is_empty() && !DATA_CLASSIFICATIONS.contains(&value) {
        report.warn(format!(
            "Invalid Data Classification '{}' (should be one of: {}){}",
            value,
            DATA_CLASSIFICATIONS.join(", "),
            line_info
        ));
    }
}

fn business_groups(value: &str, line_info: &str, report: &mut Report) {
    if value.is_empty() {
        return;
    }
    if value.trim().chars().count() < BUSINESS_GROUP_MIN_LEN {
        report.warn(format!(
            "Business Groups value '{}' is too short (minimum {} characters){}",
            value, BUSINESS_GROUP_MIN_LEN, line_info
        ));
    }
    let lower = value.to_lowercase();
    if !BUSINESS_GROUP_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        report.warn(format!(
            "Business Groups '{}' should start with one of: {}{}",
            value,
            BUSINESS_GROUP_PREFIXES.join(", "),
            line_info
        ));
    }
}

fn owning_business_group(value: &str, line_info: &str, report: &mut Report) {
    if value.is_empty() {
        return;
    }
    if value.chars().count() < OWNING_GROUP_MIN_LEN {
        report.warn(format!(
            "Owning Business group '{}' is too short (minimum {} characters){}",
            value, OWNING_GROUP_MIN_LEN, line_info
        ));
    }
    let capitalized = value
        .split_whitespace()
        .any(|w| w.chars().next().is_some_and(char::is_uppercase));
    if !capitalized {
        report.warn(format!(
            "Owning Business group '{}' should have proper capitalization{}",
            value, line_info
        ));
    }
}

fn environment(value: &str, line_info: &str, report: &mut Report) {
    if !value.is_empty() && !ENVIRONMENTS.contains(&value.to_lowercase().as_str()) {
        report.warn(format!(
            "Invalid Environment '{}' (should be one of: {}){}",
            value,
            ENVIRONMENTS.join(", "),
            line_info
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tag_key: &str, value: &str) -> Report {
        let mut r = Report::new();
        Registry::builtin().validate(tag_key, value, " (line 3)", &mut r);
        assert!(r.errors.is_empty(), "tag rules must never record errors");
        r
    }

    #[test]
    fn test_data_classification() {
        assert!(run("Data Classification", "DCL3").is_clean());
        assert!(run("Data Classification", "").is_clean());
        let r = run("Data Classification", "dcl1");
        assert_eq!(
            r.warnings,
            vec!["Invalid Data Classification 'dcl1' (should be one of: DCL1, DCL2, DCL3, DCL4) (line 3)"]
        );
    }

    #[test]
    fn test_business_groups_short_and_bad_prefix() {
        let r = run("Business Groups", "g");
        assert_eq!(r.warnings.len(), 2);
        assert!(r.warnings[0].contains("is too short (minimum 2 characters)"));
        assert!(r.warnings[1].contains("should start with one of: gip, eng, ops, fin"));
    }

    #[test]
    fn test_business_groups_prefix_is_case_insensitive() {
        assert!(run("Business Groups", "ENG-platform").is_clean());
        assert!(run("Business Groups", "").is_clean());
    }

    #[test]
    fn test_business_groups_length_uses_trimmed_value() {
        let r = run("Business Groups", " f ");
        assert!(r.warnings[0].contains("too short"));
    }

    #[test]
    fn test_owning_business_group() {
        assert!(run("Owning Business group", "Platform Engineering").is_clean());
        assert!(run("Owning Business group", "core platform Team").is_clean());
        let r = run("Owning Business group", "ops");
        assert_eq!(
            r.warnings,
            vec![
                "Owning Business group 'ops' is too short (minimum 5 characters) (line 3)",
                "Owning Business group 'ops' should have proper capitalization (line 3)",
            ]
        );
    }

    #[test]
    fn test_owning_business_group_whitespace_only() {
        let r = run("Owning Business group", "      ");
        assert_eq!(r.warnings.len(), 1);
        assert!(r.warnings[0].contains("proper capitalization"));
    }

    #[test]
    fn test_environment() {
        assert!(run("Environment", "Prod").is_clean());
        assert!(run("Environment", "STAGING").is_clean());
        let r = run("Environment", "qa");
        assert_eq!(
            r.warnings,
            vec!["Invalid Environment 'qa' (should be one of: dev, development, staging, stage, prod, production) (line 3)"]
        );
    }

    #[test]
    fn test_unknown_keys_are_accepted() {
        assert!(run("Owning group", "anything").is_clean());
        assert!(run("", "").is_clean());
        assert!(!Registry::builtin().contains("Owning group"));
    }

    #[test]
    fn test_register_custom_rule() {
        fn no_spaces(value: &str, line_info: &str, report: &mut Report) {
            if value.contains(' ') {
                report.warn(format!(
                    "Cost Center '{}' must not contain spaces{}",
                    value, line_info
                ));
            }
        }
        let mut reg = Registry::builtin();
        reg.register("Cost Center", no_spaces);
        let mut r = Report::new();
        reg.validate("Cost Center", "CC 12", "", &mut r);
        assert_eq!(r.warnings, vec!["Cost Center 'CC 12' must not contain spaces"]);
    }
}
