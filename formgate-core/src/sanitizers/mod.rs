//! Output sanitization for accepted submissions.
//!
//! Field values are escaped once, right before dispatch, so that a rendering
//! context consuming them shows the text instead of interpreting it as markup.
//! Escaping is a single pass over raw input; feeding already escaped text back
//! in will escape the entities again.

pub mod markup;
