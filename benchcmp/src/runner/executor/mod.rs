//!
//! The benchmark binary executor collaborator.
//!

pub mod process;
pub mod termination;

use std::fs::File;
use std::path::Path;

use self::termination::Termination;

///
/// Runs one benchmark binary to completion.
///
pub trait Executor {
    ///
    /// Runs the benchmarks of `binary`, appending everything it prints to `output`.
    ///
    /// Blocks until the binary exits.
    ///
    fn execute(&self, binary: &Path, output: &File) -> anyhow::Result<Termination>;
}
