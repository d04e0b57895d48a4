use anyhow::Result;

use crate::{Console, Routine};

pub const NAME: &str = "helper";

pub const GREETING: &str = "ciao";

/// What the helper routine hands back to its caller.
pub const RETURN_CODE: i32 = 1;

pub fn fixed_sequence() -> [String; 1] {
    [GREETING.to_owned()]
}

pub fn growable_sequence() -> Vec<String> {
    let mut seq = Vec::new();
    seq.push(GREETING.to_owned());
    seq
}

/// Prints the first element of each sequence, growable one first.
pub fn helper(console: &mut Console<'_>) -> Result<i32> {
    let fixed = fixed_sequence();
    let growable = growable_sequence();
    console.println(NAME, &growable[0])?;
    console.println(NAME, &fixed[0])?;
    Ok(RETURN_CODE)
}

pub struct Helper;

impl Helper {
    pub fn new() -> Self {
        Helper
    }
}

impl Default for Helper {
    fn default() -> Self {
        Self::new()
    }
}

impl Routine for Helper {
    fn name(&self) -> &'static str {
        NAME
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        let code = helper(console)?;
        log::info!("{NAME} returned {code}");
        Ok(())
    }
}
