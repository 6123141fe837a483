use crate::catalog;
use crate::diagnostics::DiagnosticSet;

/// Flags any non-blank line preceded by three consecutive blank lines.
///
/// Blank means the line is exactly a newline; whitespace-only lines do not
/// count. The lookback spans three prior lines, so this runs once over the
/// whole sequence instead of per line.
pub fn check_blank_runs(lines: &[&str], diagnostics: &mut DiagnosticSet) {
    for (i, line) in lines.iter().enumerate() {
        if *line == "\n" {
            continue;
        }
        if i > 2 && lines[i - 1] == "\n" && lines[i - 2] == "\n" && lines[i - 3] == "\n" {
            diagnostics.add(i + 1, catalog::BLANK_RUN, "");
        }
    }
}
