/// Character classes (specials, atom, qtext, dtext, ctext, CTL, LWSP).
pub mod chars;
/// Re-exports from the diagnostics crate.
pub mod diag;
/// Recursive-descent recognizer for the addr-spec grammar.
pub mod recognizer;
/// Rejection kinds and the rejection error type.
pub mod rejection;
