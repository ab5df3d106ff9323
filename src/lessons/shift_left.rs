use crate::helper::binary;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub const SHIFT_EXAMPLE: u32 = 2;
pub const SEQUENCE_START: u32 = 3;

/// Every value printed by repeatedly shifting `start` left by one while it's non-zero.
///
/// Bits shifted past bit 31 are dropped, so any start eventually reaches zero and the loop ends.
pub fn doubling_sequence(start: u32) -> Vec<u32> {
    let mut values = Vec::new();
    let mut number = start;
    while number > 0 {
        values.push(number);
        number <<= 1;
    }
    values
}

pub fn lines() -> Vec<String> {
    let shifted = SHIFT_EXAMPLE << 2;
    trace!(
        "{} << 2 = {}",
        binary::nibbles(SHIFT_EXAMPLE, 4),
        binary::nibbles(shifted, 4)
    );

    let mut lines = vec![format!("{} << 2 = {}", SHIFT_EXAMPLE, shifted)];
    lines.extend(doubling_sequence(SEQUENCE_START).into_iter().map(|value| {
        trace!("{}", binary::nibbles(value, u32::BITS));
        value.to_string()
    }));
    lines
}
