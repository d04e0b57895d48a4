use anyhow::Result;

use crate::{Console, Routine, helper};

pub const NAME: &str = "entry";

/// Prints the opening greeting, runs the helper, then prints the closing one.
pub fn entry(console: &mut Console<'_>) -> Result<()> {
    console.println(NAME, "Hello world")?;
    let code = helper::helper(console)?;
    log::debug!("{} returned {code}", helper::NAME);
    console.println(NAME, "Hello world 2")
}

pub struct Entry;

impl Entry {
    pub fn new() -> Self {
        Entry
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl Routine for Entry {
    fn name(&self) -> &'static str {
        NAME
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        entry(console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture;

    #[test]
    fn prints_four_lines_in_order() {
        let ((), out) = capture(entry);
        assert_eq!(out, "Hello world\nciao\nciao\nHello world 2\n");
    }

    #[test]
    fn transcript_attributes_helper_lines() {
        let mut buf = Vec::new();
        let lines = Entry::new().execute(&mut buf).unwrap();
        let routines: Vec<_> = lines.iter().map(|l| l.routine).collect();
        assert_eq!(routines, ["entry", "helper", "helper", "entry"]);
        let indices: Vec<_> = lines.iter().map(|l| l.index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }
}
