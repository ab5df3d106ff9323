use crate::{
    config::{self, OPERAND_A, OPERAND_B},
    helper::binary,
};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub fn xor(a: u32, b: u32) -> u32 {
    a ^ b
}

pub fn lines() -> Vec<String> {
    let result = xor(OPERAND_A, OPERAND_B);
    trace!("  {}", binary::describe(OPERAND_A, config::BYTE_BITS));
    trace!("^ {}", binary::describe(OPERAND_B, config::BYTE_BITS));
    trace!("= {}", binary::describe(result, config::BYTE_BITS));
    vec![format!("{} ^ {} = {}", OPERAND_A, OPERAND_B, result)]
}
