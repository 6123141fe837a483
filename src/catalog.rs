use std::collections::HashMap;

// Rule codes. Each code selects one message template in MESSAGES.
pub const LINE_TOO_LONG: u16 = 1;
pub const BAD_INDENTATION: u16 = 2;
pub const STRAY_SEMICOLON: u16 = 3;
pub const COMMENT_SPACING: u16 = 4;
pub const TODO_FOUND: u16 = 5;
pub const BLANK_RUN: u16 = 6;
pub const KEYWORD_SPACING: u16 = 7;
pub const CLASS_NAMING: u16 = 8;
pub const FUNCTION_NAMING: u16 = 9;
pub const ARGUMENT_NAMING: u16 = 10;
pub const VARIABLE_NAMING: u16 = 11;
pub const MUTABLE_DEFAULT: u16 = 12;

lazy_static::lazy_static! {
    /// The message catalog: rule code to message template.
    /// Templates carry at most one `%s` placeholder, filled from the
    /// diagnostic's detail at render time. Loaded once, never mutated.
    pub static ref MESSAGES: HashMap<u16, &'static str> = {
        let mut m = HashMap::new();
        m.insert(LINE_TOO_LONG, "Too long");
        m.insert(BAD_INDENTATION, "Indentation is not a multiple of four");
        m.insert(STRAY_SEMICOLON, "Unnecessary semicolon");
        m.insert(COMMENT_SPACING, "At least two spaces required before inline comments");
        m.insert(TODO_FOUND, "TODO found");
        m.insert(BLANK_RUN, "More than two blank lines used before this line");
        m.insert(KEYWORD_SPACING, "Too many spaces after '%s'");
        m.insert(CLASS_NAMING, "Class name '%s' should use CamelCase");
        m.insert(FUNCTION_NAMING, "Function name '%s' should use snake_case");
        m.insert(ARGUMENT_NAMING, "Argument name '%s' should be snake_case");
        m.insert(VARIABLE_NAMING, "Variable '%s' in function should be snake_case");
        m.insert(MUTABLE_DEFAULT, "Default argument value is mutable");
        m
    };
}
