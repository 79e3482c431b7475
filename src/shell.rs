//! Line-oriented console shell.
//!
//! Provides a `Console` trait for prompt-and-read I/O, two implementations:
//! - `StdConsole` for stdin/stdout
//! - `MockConsole` for testing
//!
//! and the `Shell` loop that reads one input line, then repeatedly reads a
//! pattern and prints every match of it in that line.

use std::io::{BufRead, Write};

use anyhow::Result;
use itertools::Itertools;

use crate::limits::Limits;
use crate::pattern::compile_with;
use crate::scan::{check_input, find_all};

/// Abstraction over the shell's line I/O.
pub trait Console {
    /// Read one line, without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Write a string as-is.
    fn write_str(&mut self, s: &str) -> Result<()>;

    /// Flush pending output (so prompts appear before reading).
    fn flush(&mut self) -> Result<()>;
}

/// Console over the process's stdin and stdout.
pub struct StdConsole {
    stdin: std::io::StdinLock<'static>,
    stdout: std::io::StdoutLock<'static>,
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: std::io::stdin().lock(),
            stdout: std::io::stdout().lock(),
        }
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        read_lossy_line(&mut self.stdin)
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.stdout.write_all(s.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Read one line as bytes and strip its terminator. Bytes that are not valid
/// UTF-8 become U+FFFD, so a line in another encoding is still searchable.
fn read_lossy_line(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Mock console for testing. Replays queued lines and records output.
#[cfg(test)]
pub struct MockConsole {
    pub lines: std::collections::VecDeque<String>,
    pub output: String,
    pub flushes: usize,
}

#[cfg(test)]
impl MockConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            output: String::new(),
            flushes: 0,
        }
    }
}

#[cfg(test)]
impl Console for MockConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.output.push_str(s);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Marker printed after each matched substring.
pub const DEFAULT_MARKER: char = '#';

/// The interactive search session.
#[derive(Debug, Clone)]
pub struct Shell {
    pub limits: Limits,
    pub marker: char,
    /// Print the compiled tree after each pattern.
    pub dump_ast: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            marker: DEFAULT_MARKER,
            dump_ast: false,
        }
    }
}

impl Shell {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Run the session until the console reaches end of input.
    ///
    /// Fails only on I/O errors or an input line over the length limit; a
    /// pattern that does not compile is reported and the loop continues.
    pub fn run(&self, console: &mut dyn Console) -> Result<()> {
        console.write_str("input: ")?;
        console.flush()?;
        let Some(input) = console.read_line()? else {
            return Ok(());
        };
        let line: Vec<char> = input.chars().collect();
        check_input(&line, &self.limits)?;

        loop {
            console.write_str("\nsearch pattern: ")?;
            console.flush()?;
            let Some(pattern) = console.read_line()? else {
                console.write_str("\n")?;
                return Ok(());
            };
            let report = self.search(&pattern, &line)?;
            console.write_str(&report)?;
            console.write_str("\n")?;
        }
    }

    /// Compile `pattern` and render the output line for `line`.
    fn search(&self, pattern: &str, line: &[char]) -> Result<String> {
        let compiled = match compile_with(pattern, &self.limits) {
            Ok(compiled) => compiled,
            Err(err) => {
                tracing::debug!(pattern, %err, "pattern rejected");
                return Ok(format!("error: {err}"));
            }
        };

        let found: Vec<_> = find_all(&compiled, line).collect();
        let mut report = String::new();
        if self.dump_ast {
            report.push_str(&format!("ast: {:?}\n", compiled.root()));
        }
        report.push_str("output: ");
        if found.is_empty() {
            report.push_str("No matches found.");
        } else {
            let marker = self.marker;
            report.push_str(
                &found
                    .iter()
                    .map(|m| format!("{}{marker}", m.text(line)))
                    .join(""),
            );
        }
        Ok(report)
    }
}
