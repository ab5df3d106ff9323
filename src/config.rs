use log::LevelFilter;

pub const APP_NAME: &str = "bitwise-lessons";

/// Log level filter. Log messages with lower levels than this will not be displayed.
#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Left hand operand shared by the and/or/xor/not lessons. `0110 1011`
pub const OPERAND_A: u32 = 107;
/// Right hand operand shared by the and/or/xor lessons. `1101 0101`
pub const OPERAND_B: u32 = 213;

/// Bit width used when rendering 8-bit example operands in log annotations
pub const BYTE_BITS: u32 = 8;
