use crate::{
    config::{self, OPERAND_A, OPERAND_B},
    helper::binary,
};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Zero everywhere except the sign bit.
pub const SIGN_BIT: i32 = i32::MIN;

pub const POSITIVE: i32 = 5;
pub const NEGATIVE: i32 = -5;

pub fn and(a: u32, b: u32) -> u32 {
    a & b
}

/// Lines printed by the sign bit test of `value`.
///
/// Both conditions are checked on their own rather than as an if/else, each one that holds
/// prints a line.
pub fn sign_bit_report(value: i32) -> Vec<String> {
    let mut lines = Vec::new();
    if (value & SIGN_BIT) == SIGN_BIT {
        lines.push(format!("{} is negative.", value));
    }
    if (value & SIGN_BIT) == 0 {
        lines.push(format!("{} is positive.", value));
    }
    lines
}

pub fn lines() -> Vec<String> {
    let result = and(OPERAND_A, OPERAND_B);
    trace!("  {}", binary::describe(OPERAND_A, config::BYTE_BITS));
    trace!("& {}", binary::describe(OPERAND_B, config::BYTE_BITS));
    trace!("= {}", binary::describe(result, config::BYTE_BITS));

    let mut lines = vec![format!("{} & {} = {}", OPERAND_A, OPERAND_B, result)];
    lines.extend(sign_bit_report(POSITIVE));
    lines.extend(sign_bit_report(NEGATIVE));
    lines
}
