//! Interactive terminal I/O.
//!
//! Commands read answers from and write output to a [`Console`] instead of the
//! process streams, so they can be driven from tests.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use colored::Colorize;
use comfy_table::Table;

/// Input reader plus output writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    // ============ Output ============

    /// Plain line.
    pub fn line(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    /// Green status line.
    pub fn success(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", msg.to_string().green())
    }

    /// Yellow status line.
    pub fn warning(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", msg.to_string().yellow())
    }

    /// Bold title.
    pub fn heading(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", msg.to_string().bold())
    }

    pub fn table(&mut self, table: &Table) -> io::Result<()> {
        writeln!(self.output, "{table}")
    }

    // ============ Input ============

    fn read_answer(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn read_required(&mut self) -> io::Result<String> {
        self.read_answer()?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    /// Ask for a value. Blank input takes `default`, or asks again when there is none.
    pub fn prompt(&mut self, label: &str, default: Option<&str>) -> io::Result<String> {
        loop {
            match default {
                Some(d) => write!(self.output, "{label} [{d}]: ")?,
                None => write!(self.output, "{label}: ")?,
            }
            let answer = self.read_required()?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            if let Some(d) = default {
                return Ok(d.to_string());
            }
        }
    }

    /// Ask for one of `choices`, returning its index. Anything else asks again.
    pub fn choose(&mut self, label: &str, choices: &[&str], default: usize) -> io::Result<usize> {
        let listing = choices.join(", ");
        let default_name = choices.get(default).copied();
        loop {
            let answer = self.prompt(&format!("{label} ({listing})"), default_name)?;
            if let Some(idx) = choices.iter().position(|c| *c == answer) {
                return Ok(idx);
            }
            writeln!(
                self.output,
                "{} '{answer}' is not one of {listing}.",
                "Error:".red()
            )?;
        }
    }

    /// Yes/no question defaulting to no. Closed input counts as no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question} [y/N]: ")?;
        let answer = self.read_answer()?.unwrap_or_default();
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    /// Block until the user presses Enter.
    pub fn pause(&mut self, msg: &str) -> io::Result<()> {
        write!(self.output, "{msg}")?;
        self.read_required()?;
        writeln!(self.output)
    }
}

#[cfg(test)]
impl<R: BufRead> Console<R, Vec<u8>> {
    /// Everything written so far.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}
