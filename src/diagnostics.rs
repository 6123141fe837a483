use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single style violation.
///
/// A diagnostic is uniquely identified by its `(line, code, detail)` triple;
/// the derived `Ord` on that field order is also the report order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based physical line number where the violation is reported.
    pub line: usize,
    /// Rule code selecting the message template.
    pub code: u16,
    /// Substituted into the template (e.g. the offending identifier).
    /// Empty for rules without a placeholder.
    pub detail: String,
}

/// Accumulates diagnostics from all rule sets for one file.
///
/// Duplicates with an identical triple collapse to one. No order is kept
/// during accumulation; `into_sorted` produces the final report order.
#[derive(Debug, Default)]
pub struct DiagnosticSet {
    items: HashSet<Diagnostic>,
}

impl DiagnosticSet {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation.
    pub fn add(&mut self, line: usize, code: u16, detail: impl Into<String>) {
        self.items.insert(Diagnostic {
            line,
            code,
            detail: detail.into(),
        });
    }

    /// Number of distinct diagnostics collected so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drains the set into a vector sorted ascending by `(line, code, detail)`.
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut items: Vec<Diagnostic> = self.items.into_iter().collect();
        items.sort();
        items
    }
}
