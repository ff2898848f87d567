use crate::io_adapters::InputSource;
use anyhow::Result;
use std::io::Write;

/// Object-safe trait for any exercise that can be executed by the [`Runner`](crate::Runner).
///
/// An exercise reads everything it needs from an [`InputSource`] and writes its
/// single line of output to `stdout`. Informational outcomes such as an invalid
/// number are written as output and reported as `Ok(())`; only I/O failures
/// surface as errors.
pub trait Exercise {
    /// Canonical name of the exercise, e.g. "sum" or "vowels".
    fn name(&self) -> &'static str;

    /// Executes the exercise once.
    fn run(&self, input: &mut dyn InputSource, stdout: &mut dyn Write) -> Result<()>;
}
