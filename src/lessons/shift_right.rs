use crate::{config, helper::binary};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub const SHIFT_EXAMPLE: u32 = 4;
pub const SEQUENCE_START: u32 = 107;

/// Every value printed by repeatedly shifting `start` right by one until it hits zero.
///
/// Vacated high bits fill with 0, so each step is the previous value halved and rounded down.
pub fn halving_sequence(start: u32) -> Vec<u32> {
    let mut values = Vec::new();
    let mut number = start;
    while number > 0 {
        values.push(number);
        number >>= 1;
    }
    values
}

pub fn lines() -> Vec<String> {
    let shifted = SHIFT_EXAMPLE >> 2;
    trace!(
        "{} >> 2 = {}",
        binary::nibbles(SHIFT_EXAMPLE, 4),
        binary::nibbles(shifted, 4)
    );

    let mut lines = vec![format!("{} >> 2 = {}", SHIFT_EXAMPLE, shifted)];
    lines.extend(halving_sequence(SEQUENCE_START).into_iter().map(|value| {
        trace!("{}", binary::nibbles(value, config::BYTE_BITS));
        value.to_string()
    }));
    lines
}
