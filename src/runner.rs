use crate::command::Exercise;
use crate::io_adapters::InputSource;
use std::io::Write;
use tracing::info_span;

/// Runs registered exercises by name.
///
/// See [`Default`] for the exercises included out of the box.
///
/// Example
/// ```
/// use intro_exercises::Runner;
/// use intro_exercises::io_adapters::MemInput;
///
/// let mut out = Vec::new();
/// Runner::default()
///     .run("sum", &mut MemInput::new("5\n"), &mut out)
///     .unwrap();
/// assert_eq!(out, b"Sum = 15\n");
/// ```
pub struct Runner {
    exercises: Vec<Box<dyn Exercise>>,
}

impl Runner {
    /// Create a runner with a custom set of exercises.
    pub fn new(exercises: Vec<Box<dyn Exercise>>) -> Self {
        Self { exercises }
    }

    /// Names of the registered exercises, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.exercises.iter().map(|e| e.name())
    }

    /// Run a single exercise by name.
    ///
    /// Returns an error if no exercise has that name or if reading input or
    /// writing output fails.
    pub fn run(
        &self,
        name: &str,
        input: &mut dyn InputSource,
        stdout: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let exercise = self
            .exercises
            .iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| anyhow::anyhow!("exercise not found: {}", name))?;
        let _span = info_span!("exercise", name).entered();
        exercise.run(input, stdout)?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for Runner {
    /// Create a runner with every exercise in this crate:
    /// `sum`, `vowels` and `matching`.
    fn default() -> Self {
        use crate::matching::MatchingCharacters;
        use crate::sum::SumCalculator;
        use crate::vowels::VowelChecker;
        Self::new(vec![
            Box::new(SumCalculator),
            Box::new(VowelChecker),
            Box::new(MatchingCharacters),
        ])
    }
}
