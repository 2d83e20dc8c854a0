//! String rendering of container contents
//!
//! One joining code path serves every render call: elements are written in
//! sequence order, separated by [`SEPARATOR`], with no leading or trailing
//! separator. An empty sequence renders as [`EMPTY_SENTINEL`] rather than
//! an empty string, so an emptied container is distinguishable in output.

use std::fmt::{Display, Write};

/// Separator placed between rendered elements.
pub const SEPARATOR: char = ':';

/// Rendering of an empty sequence.
pub const EMPTY_SENTINEL: &str = "[empty]";

/// Join the textual representations of `elements` in order.
pub fn join_rendered<T: Display>(elements: &[T]) -> String {
    if elements.is_empty() {
        return EMPTY_SENTINEL.to_string();
    }
    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        // Writing to a String cannot fail
        let _ = write!(out, "{}", element);
    }
    out
}
