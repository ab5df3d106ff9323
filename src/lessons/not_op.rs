use crate::{
    config::{self, OPERAND_A},
    helper::binary,
};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Flips every one of the 32 bits, not just the ones the operand happens to use.
pub fn not(a: u32) -> u32 {
    !a
}

pub fn lines() -> Vec<String> {
    let result = not(OPERAND_A);
    trace!("~ {}", binary::describe(OPERAND_A, config::BYTE_BITS));
    trace!("= {}", binary::nibbles(result, u32::BITS));
    vec![format!("~{} = {}", OPERAND_A, result)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_is_full_width() {
        assert_eq!(not(OPERAND_A), 4294967188);
        assert_eq!(not(OPERAND_A) & 0xff, 0b1001_0100);
        assert_eq!(not(0), u32::MAX);
    }

    #[test]
    fn lesson_output() {
        assert_eq!(lines(), vec!["~107 = 4294967188"]);
    }
}
