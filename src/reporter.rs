use crate::analyzer::FileReport;
use crate::catalog;
use crate::diagnostics::Diagnostic;
use std::path::Path;

/// Renders one diagnostic as a report line.
///
/// Format: `<path>: Line <line>: S<code, zero-padded to 3> <message>`, where
/// the message is the catalog template with its `%s` placeholder replaced by
/// the diagnostic's detail.
pub fn render(path: &Path, diagnostic: &Diagnostic) -> String {
    let template = catalog::MESSAGES
        .get(&diagnostic.code)
        .copied()
        .unwrap_or_default();
    let message = template.replace("%s", &diagnostic.detail);
    format!(
        "{}: Line {}: S{:03} {}",
        path.display(),
        diagnostic.line,
        diagnostic.code,
        message
    )
}

/// Prints a file's diagnostics to stdout, one line each, in report order.
pub fn print_report(report: &FileReport) {
    for diagnostic in &report.diagnostics {
        println!("{}", render(&report.file, diagnostic));
    }
}
