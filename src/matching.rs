use crate::command::Exercise;
use crate::io_adapters::InputSource;
use anyhow::Result;
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

pub const FIRST_PROMPT: &str = "Enter string-1";
pub const SECOND_PROMPT: &str = "Enter string-2";

/// Number of distinct characters present in both strings. Case-sensitive.
pub fn count_matching_chars(s1: &str, s2: &str) -> usize {
    let first: HashSet<char> = s1.chars().collect();
    let second: HashSet<char> = s2.chars().collect();
    first.intersection(&second).count()
}

/// Reads two strings and prints how many distinct characters they share.
#[derive(Default)]
pub struct MatchingCharacters;

impl Exercise for MatchingCharacters {
    fn name(&self) -> &'static str {
        "matching"
    }

    fn run(&self, input: &mut dyn InputSource, stdout: &mut dyn Write) -> Result<()> {
        let s1 = input.read_line(FIRST_PROMPT)?;
        let s2 = input.read_line(SECOND_PROMPT)?;
        let count = count_matching_chars(&s1, &s2);
        debug!(count, "counted matching characters");
        writeln!(stdout, "Matching characters count: {}", count)?;
        Ok(())
    }
}
