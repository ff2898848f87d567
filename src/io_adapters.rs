use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::io::{BufRead, Cursor, IsTerminal, Result as IoResult, Write};
use std::rc::Rc;
use tracing::debug;

/// Source of user input for exercises.
///
/// Each call shows `prompt` (if the source has somewhere to show it) and returns
/// one line of text without its line terminator. End of input is reported as an
/// empty line rather than an error.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Read one line of raw bytes and decode it, replacing invalid UTF-8.
///
/// The trailing `\n` or `\r\n` is removed. Returns an empty string at end of input.
fn read_line_lossy(reader: &mut dyn BufRead) -> Result<String> {
    let mut raw = Vec::new();
    reader
        .read_until(b'\n', &mut raw)
        .context("failed to read line")?;
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Map a `rustyline` result onto the [`InputSource`] contract.
///
/// Eof (Ctrl-D) and Interrupted (Ctrl-C) both read as an empty answer.
fn editor_line(result: rustyline::Result<String>) -> Result<String> {
    match result {
        Ok(line) => Ok(line),
        Err(ReadlineError::Eof) => {
            debug!("end of input, treating as empty line");
            Ok(String::new())
        }
        Err(ReadlineError::Interrupted) => {
            debug!("interrupted, treating as empty line");
            Ok(String::new())
        }
        Err(err) => Err(err).context("failed to read line"),
    }
}

/// Process stdin as an [`InputSource`].
///
/// On a terminal, lines are read through a `rustyline` editor. Otherwise the
/// prompt is written to stdout and the line is read straight from stdin.
pub struct TerminalInput {
    editor: Option<DefaultEditor>,
}

impl TerminalInput {
    pub fn new() -> Result<Self> {
        let editor = if std::io::stdin().is_terminal() {
            Some(DefaultEditor::new().context("failed to initialize line editor")?)
        } else {
            debug!("stdin is not a terminal, reading lines directly");
            None
        };
        Ok(Self { editor })
    }
}

impl InputSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.as_mut() {
            Some(editor) => editor_line(editor.readline(prompt)),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(prompt.as_bytes())?;
                stdout.flush()?;
                read_line_lossy(&mut std::io::stdin().lock())
            }
        }
    }
}

/// Memory-backed input with predetermined lines.
///
/// Prompts are not echoed anywhere; they are recorded so callers can inspect
/// what would have been shown.
pub struct MemInput {
    cursor: Cursor<Vec<u8>>,
    prompts: Vec<String>,
}

impl MemInput {
    /// Create a MemInput that will read lines from the provided buffer.
    pub fn new(buf: impl Into<Vec<u8>>) -> Self {
        Self {
            cursor: Cursor::new(buf.into()),
            prompts: Vec::new(),
        }
    }

    /// Prompts requested so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputSource for MemInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        read_line_lossy(&mut self.cursor)
    }
}

/// Output sink that several runs can share; every clone of the handle sees
/// the same bytes.
#[derive(Default)]
pub struct MemWriter {
    shared: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer plus a handle to its buffer, for reading output after the writer
    /// has been handed to an exercise.
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let writer = Self::new();
        let handle = Rc::clone(&writer.shared);
        (writer, handle)
    }

    /// Everything written so far, decoded lossily.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.shared.borrow()).into_owned()
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.shared.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}
