//! Output sinks handed to commands and to the runner.
//!
//! Nothing in this workspace writes to process streams directly; every line
//! goes through an [`Output`] so hosts and tests can capture it.

use std::io::{self, Write};

/// Line-oriented output with separate normal and error streams.
pub trait Output {
    /// Writes one line to the normal stream.
    fn write_out(&mut self, line: &str) -> io::Result<()>;

    /// Writes one line to the error stream.
    fn write_err(&mut self, line: &str) -> io::Result<()>;
}

/// [`Output`] backed by the process's stdout and stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdOutput;

impl Output for StdOutput {
    fn write_out(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }

    fn write_err(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{line}")
    }
}

/// [`Output`] that keeps every line in memory.
///
/// # Examples
///
/// ```
/// use command_input_runner::{BufferedOutput, Output};
///
/// let mut output = BufferedOutput::default();
/// output.write_out("done").unwrap();
/// output.write_err("careful").unwrap();
///
/// assert_eq!(output.out_lines(), ["done"]);
/// assert_eq!(output.err_lines(), ["careful"]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferedOutput {
    out: Vec<String>,
    err: Vec<String>,
}

impl BufferedOutput {
    /// Lines written to the normal stream, in order.
    pub fn out_lines(&self) -> &[String] {
        &self.out
    }

    /// Lines written to the error stream, in order.
    pub fn err_lines(&self) -> &[String] {
        &self.err
    }
}

impl Output for BufferedOutput {
    fn write_out(&mut self, line: &str) -> io::Result<()> {
        self.out.push(line.to_string());
        Ok(())
    }

    fn write_err(&mut self, line: &str) -> io::Result<()> {
        self.err.push(line.to_string());
        Ok(())
    }
}
