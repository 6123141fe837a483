use crate::catalog;
use crate::diagnostics::DiagnosticSet;
use crate::naming::is_snake_case;
use regex::Regex;

/// A per-line rule: 0-based line index, raw line text (trailing newline
/// included), and the collector to emit into. Rules are independent and
/// order-insensitive; any execution order yields the same final set.
pub type LineRule = fn(usize, &str, &mut DiagnosticSet);

/// The fixed catalog of per-line rules, run in this order for each line.
pub const LINE_RULES: [LineRule; 8] = [
    check_line_length,
    check_indentation,
    check_semicolon,
    check_comment_spacing,
    check_todo,
    check_keyword_spacing,
    check_class_name,
    check_function_name,
];

/// Maximum allowed line length in characters, newline included.
const MAX_LINE_LENGTH: usize = 79;

lazy_static::lazy_static! {
    // Two or more spaces after the keyword; leading indentation is spaces only,
    // anchored at the start of the line.
    static ref DOUBLE_SPACED_DEF: Regex = Regex::new(r"^ *def  ").unwrap();
    static ref DOUBLE_SPACED_CLASS: Regex = Regex::new(r"^ *class  ").unwrap();
    // A function definition line, any leading whitespace.
    static ref DEF_LINE: Regex = Regex::new(r"^\s*def ").unwrap();
}

/// Lines longer than 79 characters.
pub fn check_line_length(i: usize, line: &str, diagnostics: &mut DiagnosticSet) {
    if line.chars().count() > MAX_LINE_LENGTH {
        diagnostics.add(i + 1, catalog::LINE_TOO_LONG, "");
    }
}

/// Leading whitespace must be a multiple of four characters.
pub fn check_indentation(i: usize, line: &str, diagnostics: &mut DiagnosticSet) {
    if line == "\n" {
        return;
    }
    let indent = line.chars().take_while(|c| c.is_whitespace()).count();
    if indent % 4 != 0 {
        diagnostics.add(i + 1, catalog::BAD_INDENTATION, "");
    }
}

/// A semicolon that is neither quoted nor inside a comment.
///
/// Only the first semicolon on the line is considered. Quoting is a
/// single-pair heuristic: the first `'…'` pair and the first `"…"` pair are
/// located, and a semicolon strictly inside either is exempt. This is not
/// full string-literal tokenization.
pub fn check_semicolon(i: usize, line: &str, diagnostics: &mut DiagnosticSet) {
    let chars: Vec<char> = line.chars().collect();
    let semicolon = match chars.iter().position(|&c| c == ';') {
        Some(pos) => pos,
        None => return,
    };

    if inside_first_quote_pair(&chars, '\'', semicolon)
        || inside_first_quote_pair(&chars, '"', semicolon)
    {
        return;
    }

    // A comment marker before the semicolon means the semicolon is commented
    // out; after it (or absent), the semicolon is live code.
    match chars.iter().position(|&c| c == '#') {
        Some(comment) if comment < semicolon => {}
        _ => diagnostics.add(i + 1, catalog::STRAY_SEMICOLON, ""),
    }
}

fn inside_first_quote_pair(chars: &[char], quote: char, pos: usize) -> bool {
    let open = match chars.iter().position(|&c| c == quote) {
        Some(p) => p,
        None => return false,
    };
    let close = chars[open + 1..]
        .iter()
        .position(|&c| c == quote)
        .map(|p| open + 1 + p);
    match close {
        Some(close) => open < pos && pos < close,
        None => false,
    }
}

/// Inline comments need two spaces before the `#`.
pub fn check_comment_spacing(i: usize, line: &str, diagnostics: &mut DiagnosticSet) {
    let chars: Vec<char> = line.chars().collect();
    let comment = match chars.iter().position(|&c| c == '#') {
        Some(pos) => pos,
        None => return,
    };
    if (comment > 0 && chars[comment - 1] != ' ') || (comment > 1 && chars[comment - 2] != ' ') {
        diagnostics.add(i + 1, catalog::COMMENT_SPACING, "");
    }
}

/// `todo` (any case) inside a comment.
///
/// Only the first occurrence on the line is compared against the comment
/// marker, so a match before the `#` masks any later one.
pub fn check_todo(i: usize, line: &str, diagnostics: &mut DiagnosticSet) {
    let chars: Vec<char> = line.chars().collect();
    let comment = match chars.iter().position(|&c| c == '#') {
        Some(pos) => pos,
        None => return,
    };
    let lowered: Vec<char> = chars.iter().map(|c| c.to_ascii_lowercase()).collect();
    if let Some(todo) = lowered.windows(4).position(|w| w == ['t', 'o', 'd', 'o']) {
        if todo > comment {
            diagnostics.add(i + 1, catalog::TODO_FOUND, "");
        }
    }
}

/// More than one space after `def` or `class`.
pub fn check_keyword_spacing(i: usize, line: &str, diagnostics: &mut DiagnosticSet) {
    if DOUBLE_SPACED_DEF.is_match(line) {
        diagnostics.add(i + 1, catalog::KEYWORD_SPACING, "def");
    }
    if DOUBLE_SPACED_CLASS.is_match(line) {
        diagnostics.add(i + 1, catalog::KEYWORD_SPACING, "class");
    }
}

/// Class names must start with an uppercase letter.
///
/// Only unindented `class` lines are considered.
pub fn check_class_name(i: usize, line: &str, diagnostics: &mut DiagnosticSet) {
    if !line.starts_with("class ") {
        return;
    }
    let name = match declared_name(line) {
        Some(name) => name,
        None => return,
    };
    let first = match name.chars().next() {
        Some(c) => c,
        None => return,
    };
    if first.to_uppercase().to_string() != first.to_string() {
        diagnostics.add(i + 1, catalog::CLASS_NAMING, name);
    }
}

/// Function names must be snake_case.
pub fn check_function_name(i: usize, line: &str, diagnostics: &mut DiagnosticSet) {
    if !DEF_LINE.is_match(line) {
        return;
    }
    let name = match declared_name(line) {
        Some(name) => name,
        None => return,
    };
    if !is_snake_case(name) {
        diagnostics.add(i + 1, catalog::FUNCTION_NAMING, name);
    }
}

/// Extracts the declared name from a `def`/`class` line: the second
/// whitespace-separated token once trailing `:`/newline are stripped, cut at
/// the first `(` to drop a parameter list or inheritance suffix.
fn declared_name(line: &str) -> Option<&str> {
    let token = line
        .trim_matches(&[':', '\n'][..])
        .split_whitespace()
        .nth(1)?;
    let name = token.split('(').next().unwrap_or(token);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
