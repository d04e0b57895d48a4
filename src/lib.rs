use std::{fmt::Display, io::Write};

use anyhow::Result;
use serde::Serialize;

pub mod entry;
pub mod helper;
pub mod sum;

/// A single line printed by a routine, as recorded in the run transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub routine: &'static str,
    pub index: usize,
    pub text: String,
}

/// Output sink shared by every routine in a run.
///
/// Each call to [`Console::println`] writes one line to the underlying writer
/// and appends it to the transcript, so the whole run can be replayed or
/// serialized afterwards.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    transcript: Vec<Line>,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Console {
            out,
            transcript: vec![],
        }
    }

    pub fn println(&mut self, routine: &'static str, text: impl Display) -> Result<()> {
        let text = text.to_string();
        writeln!(self.out, "{text}")?;
        log::trace!("{routine}: wrote line {}", self.transcript.len());
        self.transcript.push(Line {
            routine,
            index: self.transcript.len(),
            text,
        });
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn transcript(&self) -> &[Line] {
        &self.transcript
    }

    pub fn into_transcript(self) -> Vec<Line> {
        self.transcript
    }
}

pub trait Routine {
    fn name(&self) -> &'static str;

    fn run(&self, console: &mut Console<'_>) -> Result<()>;

    /// Runs the routine against `out` and hands back what it printed.
    fn execute(&self, out: &mut dyn Write) -> Result<Vec<Line>> {
        log::debug!("running {}", self.name());
        let mut console = Console::new(out);
        self.run(&mut console)?;
        console.flush()?;
        Ok(console.into_transcript())
    }
}

#[cfg(test)]
pub(crate) fn capture<T>(f: impl FnOnce(&mut Console<'_>) -> Result<T>) -> (T, String) {
    let mut buf = Vec::new();
    let value = {
        let mut console = Console::new(&mut buf);
        f(&mut console).unwrap()
    };
    (value, String::from_utf8(buf).unwrap())
}
