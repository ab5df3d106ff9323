use crate::{config, helper::binary};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Each bit is worth 2^n: 1, 2, 4, 8, 16 and so on.
pub const TWO_HUNDRED: u32 = 200;

/// Only frames how a number breaks down into bits, nothing is printed.
pub fn lines() -> Vec<String> {
    trace!("{}", binary::describe(TWO_HUNDRED, config::BYTE_BITS));
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_nothing() {
        assert!(lines().is_empty());
    }

    #[test]
    fn two_hundred_is_128_64_8() {
        assert_eq!(binary::place_values(TWO_HUNDRED), vec![128, 64, 8]);
    }
}
