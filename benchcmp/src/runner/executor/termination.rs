//!
//! The benchmark binary termination.
//!

///
/// How a benchmark binary terminated.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The binary exited with a code.
    Exited(i32),
    /// The binary was stopped without an exit code, e.g. by a signal.
    Abnormal(String),
}

impl From<std::process::ExitStatus> for Termination {
    fn from(status: std::process::ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Exited(code),
            None => Self::Abnormal(status.to_string()),
        }
    }
}
