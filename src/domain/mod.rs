//! Domain name syntax checks.
//!
//! Candidates are validated before they reach the network so that malformed
//! names never cost a DNS query.
//!
//! Key functions:
//! - `is_valid_domain()` - Checks that every label follows the hostname grammar
//! - `label_count()` - Number of labels, used to rank wildcard zones by specificity

use std::sync::LazyLock;

use regex::Regex;

/// 1-63 characters, alphanumeric with internal hyphens only.
static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9](?:[-a-zA-Z0-9]{0,61}[a-zA-Z0-9])?$")
        .expect("label pattern is a valid regex")
});

/// Returns `true` if `name` is a syntactically valid DNS label sequence.
///
/// The name is split on `.` and every non-empty component must be a valid
/// label. A name without any label at all is invalid.
///
/// # Examples
///
/// ```
/// use wildsift::domain::is_valid_domain;
///
/// assert!(is_valid_domain("api.example.com"));
/// assert!(!is_valid_domain("-api.example.com"));
/// ```
pub fn is_valid_domain(name: &str) -> bool {
    let mut labels = name.split('.').filter(|label| !label.is_empty()).peekable();
    labels.peek().is_some() && labels.all(|label| LABEL.is_match(label))
}

/// Number of non-empty dot-separated labels in `name`.
pub fn label_count(name: &str) -> usize {
    name.split('.').filter(|label| !label.is_empty()).count()
}
