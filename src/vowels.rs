use crate::command::Exercise;
use crate::io_adapters::InputSource;
use anyhow::Result;
use std::collections::BTreeSet;
use std::io::Write;
use tracing::debug;

pub const PROMPT: &str = "Enter word: ";

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Lower-case ASCII letters; everything else passes through unchanged.
pub fn normalize(word: &str) -> String {
    word.to_ascii_lowercase()
}

/// Distinct characters of `word` in `'a'..='z'`.
pub fn letter_set(word: &str) -> BTreeSet<char> {
    word.chars().filter(|c| c.is_ascii_lowercase()).collect()
}

/// Whether every vowel appears in an already normalized word.
pub fn has_all_vowels(word: &str) -> bool {
    let letters = letter_set(word);
    VOWELS.iter().all(|v| letters.contains(v))
}

/// Reads a word and reports whether it contains every vowel.
#[derive(Default)]
pub struct VowelChecker;

impl Exercise for VowelChecker {
    fn name(&self) -> &'static str {
        "vowels"
    }

    fn run(&self, input: &mut dyn InputSource, stdout: &mut dyn Write) -> Result<()> {
        let word = normalize(&input.read_line(PROMPT)?);
        let present = has_all_vowels(&word);
        debug!(%word, present, "checked vowels");
        if present {
            writeln!(stdout, "All vowels are present in {}", word)?;
        } else {
            writeln!(stdout, "All vowels are not present in {}", word)?;
        }
        Ok(())
    }
}
