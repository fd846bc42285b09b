//! Header check for review CSV files.
//!
//! Compares the parsed header row against the expected review columns. A
//! missing column is not fatal on its own: every row then lacks a required
//! value and the cleaner drops it. The pipeline reports the result as
//! warnings so the cause of an empty result is visible.
//!
//! # Example
//!
//! ```rust,ignore
//! use appreviews::validation::check_headers;
//!
//! let check = check_headers(&["review_id".to_string(), "rating".to_string()]);
//! assert!(!check.is_complete());
//! assert!(check.missing.contains(&"app_name".to_string()));
//! ```

use serde::Serialize;

use crate::models::columns;

/// Outcome of comparing headers to the expected columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderCheck {
    /// Expected columns absent from the file, in expected order.
    pub missing: Vec<String>,
    /// Columns present in the file but not part of the review schema.
    pub unexpected: Vec<String>,
}

impl HeaderCheck {
    /// True when every expected column is present.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// True when at least one required (non-gender) column is missing.
    pub fn rejects_all_rows(&self) -> bool {
        self.missing.iter().any(|c| c != columns::USER_GENDER)
    }
}

/// Compare `headers` with the expected review columns.
pub fn check_headers<S: AsRef<str>>(headers: &[S]) -> HeaderCheck {
    let present = |name: &str| headers.iter().any(|h| h.as_ref() == name);

    let missing = columns::ALL
        .iter()
        .filter(|&&name| !present(name))
        .map(|name| name.to_string())
        .collect();

    let unexpected = headers
        .iter()
        .map(AsRef::as_ref)
        .filter(|h| !columns::ALL.contains(h))
        .map(str::to_string)
        .collect();

    HeaderCheck { missing, unexpected }
}
