//! Renders integers the way you'd write them on a whiteboard when explaining bits,
//! e.g. `107 = 0110 1011 = 64 + 32 + 8 + 2 + 1`.

/// The lowest `width` bits of `value`, most significant first, split into nibbles.
///
/// `width` is rounded up to a whole number of nibbles and clamped to 32.
pub fn nibbles(value: u32, width: u32) -> String {
    let nibble_count = width.clamp(1, u32::BITS).div_ceil(4);
    (0..nibble_count)
        .rev()
        .map(|nibble| {
            (0..4)
                .rev()
                .map(|bit| {
                    if (value >> (nibble * 4 + bit)) & 1 == 1 {
                        '1'
                    } else {
                        '0'
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The powers of two set in `value`, largest first.
pub fn place_values(value: u32) -> Vec<u32> {
    (0..u32::BITS)
        .rev()
        .map(|bit| 1u32 << bit)
        .filter(|place| value & place != 0)
        .collect()
}

/// `place_values` joined as a sum, or `0` when no bits are set.
pub fn place_value_sum(value: u32) -> String {
    let places = place_values(value);
    if places.is_empty() {
        return "0".to_string();
    }
    places
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

/// One-line annotation used by the lesson trace logs.
pub fn describe(value: u32, width: u32) -> String {
    format!(
        "{} = {} = {}",
        value,
        nibbles(value, width),
        place_value_sum(value)
    )
}
