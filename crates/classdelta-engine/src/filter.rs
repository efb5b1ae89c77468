//! Class-name prefix filter applied while loading a snapshot.

use serde::{Deserialize, Serialize};

/// Include/exclude prefixes over dotted class names.
///
/// An empty include list admits every class. Exclusion wins over inclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl ClassFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    pub fn matches(&self, class_name: &str) -> bool {
        let included = self.include.is_empty()
            || self
                .include
                .iter()
                .any(|prefix| class_name.starts_with(prefix.as_str()));
        included
            && !self
                .exclude
                .iter()
                .any(|prefix| class_name.starts_with(prefix.as_str()))
    }
}
