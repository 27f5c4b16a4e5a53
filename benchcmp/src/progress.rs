//!
//! Console status lines.
//!
//! Status lines go to `stderr`, so that `stdout` carries only the report.
//!

use colored::Colorize;

/// The width of the right-aligned status verb column.
const VERB_WIDTH: usize = 12;

///
/// Prints a Cargo-style status line with a green verb.
///
pub fn status(verb: &str, message: impl std::fmt::Display) {
    eprintln!(
        "{} {message}",
        format!("{verb:>VERB_WIDTH$}").bright_green().bold()
    );
}

///
/// Prints a status line with a yellow verb for conditions that do not stop the run.
///
pub fn warning(verb: &str, message: impl std::fmt::Display) {
    eprintln!(
        "{} {message}",
        format!("{verb:>VERB_WIDTH$}").bright_yellow().bold()
    );
}

///
/// Formats `index` out of `total`, padding the index to the width of the total.
///
pub fn fraction(index: usize, total: usize) -> String {
    let width = total.to_string().len();
    format!("{index:>width$}/{total}")
}
