use crate::{
    config::{self, OPERAND_A, OPERAND_B},
    helper::binary,
};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub fn or(a: u32, b: u32) -> u32 {
    a | b
}

/// A bitfield: each color channel is its own bit, mixes are made by or-ing them together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorFlags(pub u8);

impl ColorFlags {
    pub const BLACK: Self = Self(0); // 000
    pub const RED: Self = Self(1); // 001
    pub const GREEN: Self = Self(2); // 010
    pub const BLUE: Self = Self(4); // 100

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for ColorFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

pub const CYAN: ColorFlags = ColorFlags::GREEN.union(ColorFlags::BLUE); // 110
pub const YELLOW: ColorFlags = ColorFlags::RED.union(ColorFlags::GREEN); // 011
pub const MAGENTA: ColorFlags = ColorFlags::RED.union(ColorFlags::BLUE); // 101
pub const WHITE: ColorFlags = ColorFlags::RED
    .union(ColorFlags::GREEN)
    .union(ColorFlags::BLUE); // 111

pub fn lines() -> Vec<String> {
    let result = or(OPERAND_A, OPERAND_B);
    trace!("  {}", binary::describe(OPERAND_A, config::BYTE_BITS));
    trace!("| {}", binary::describe(OPERAND_B, config::BYTE_BITS));
    trace!("= {}", binary::describe(result, config::BYTE_BITS));

    for (name, color) in [
        ("black", ColorFlags::BLACK),
        ("cyan", CYAN),
        ("yellow", YELLOW),
        ("magenta", MAGENTA),
        ("white", WHITE),
    ] {
        trace!(
            "{} = {} (red: {}, green: {}, blue: {})",
            name,
            binary::nibbles(color.0.into(), 3),
            color.contains(ColorFlags::RED),
            color.contains(ColorFlags::GREEN),
            color.contains(ColorFlags::BLUE),
        );
    }

    vec![format!("{} | {} = {}", OPERAND_A, OPERAND_B, result)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_of_operands() {
        assert_eq!(or(OPERAND_A, OPERAND_B), 255);
    }

    #[test]
    fn color_mixes() {
        assert_eq!(CYAN, ColorFlags(6));
        assert_eq!(YELLOW, ColorFlags(3));
        assert_eq!(MAGENTA, ColorFlags(5));
        assert_eq!(WHITE, ColorFlags(7));
        assert_eq!(ColorFlags::RED | ColorFlags::GREEN | ColorFlags::BLUE, WHITE);
    }

    #[test]
    fn mixes_contain_their_channels() {
        assert!(CYAN.contains(ColorFlags::GREEN));
        assert!(CYAN.contains(ColorFlags::BLUE));
        assert!(!CYAN.contains(ColorFlags::RED));
        assert!(WHITE.contains(MAGENTA));
        assert!(ColorFlags::BLACK.contains(ColorFlags::BLACK));
    }

    #[test]
    fn lesson_output_is_only_the_or_result() {
        assert_eq!(lines(), vec!["107 | 213 = 255"]);
    }
}
