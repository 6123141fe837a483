// Rules module
// This module exports the three categories of style rules.

/// Rules operating on one physical line of source text.
pub mod line;

/// Rule operating on the full line sequence (blank-line runs).
pub mod blank;

/// Rules operating on the parsed syntax tree.
pub mod tree;
