//! Small introductory command-line exercises.
//!
//! Each exercise reads its input from an [`io_adapters::InputSource`], performs one
//! computation and writes a single line of output:
//!
//! - [`sum::SumCalculator`]: sum of the first `n` natural numbers.
//! - [`vowels::VowelChecker`]: whether a word contains every vowel.
//! - [`matching::MatchingCharacters`]: distinct characters shared by two strings.
//!
//! The [`Runner`] executes exercises by name; the binaries in this package are thin
//! wrappers that run one exercise against the terminal.

pub mod command;
pub mod io_adapters;
pub mod logging;
pub mod matching;
mod runner;
pub mod sum;
pub mod vowels;

/// Just a convenient re-export of the exercise runner.
///
/// See [`Runner`] for the high-level API and examples.
pub use runner::Runner;
