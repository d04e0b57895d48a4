use anyhow::Result;

use crate::{Console, Routine};

pub const NAME: &str = "sum";

/// Widened so that any pair of `i32` operands has an exact sum.
pub fn add(a: i32, b: i32) -> i64 {
    i64::from(a) + i64::from(b)
}

pub fn sum(console: &mut Console<'_>, a: i32, b: i32) -> Result<()> {
    console.println(NAME, add(a, b))
}

pub struct Sum {
    a: i32,
    b: i32,
}

impl Sum {
    pub fn new(a: i32, b: i32) -> Self {
        Sum { a, b }
    }
}

impl Routine for Sum {
    fn name(&self) -> &'static str {
        NAME
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        log::debug!("adding {} and {}", self.a, self.b);
        sum(console, self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture;

    #[test]
    fn prints_sum() {
        let ((), out) = capture(|c| sum(c, 2, 3));
        assert_eq!(out, "5\n");
    }

    #[test]
    fn negative_operands() {
        let ((), out) = capture(|c| sum(c, -4, 1));
        assert_eq!(out, "-3\n");
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert_eq!(add(i32::MAX, i32::MAX), 4_294_967_294);
        assert_eq!(add(i32::MIN, i32::MIN), -4_294_967_296);
        let ((), out) = capture(|c| sum(c, i32::MAX, 1));
        assert_eq!(out, "2147483648\n");
    }

    #[test]
    fn routine_prints_one_line() {
        let mut buf = Vec::new();
        let lines = Sum::new(40, 2).execute(&mut buf).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "42");
        assert_eq!(buf, b"42\n");
    }
}
