//! The bitwise operator lessons, in the order they're taught.
//!
//! Every lesson is a plain function returning the lines it prints, so the text can be checked
//! without a console attached.

pub mod and_op;
pub mod bit_values;
pub mod not_op;
pub mod or_op;
pub mod shift_left;
pub mod shift_right;
pub mod xor_op;

/// One self-contained demonstration block.
#[derive(Clone, Copy)]
pub struct Lesson {
    pub name: &'static str,
    lines: fn() -> Vec<String>,
}

impl Lesson {
    pub const fn new(name: &'static str, lines: fn() -> Vec<String>) -> Self {
        Self { name, lines }
    }

    /// Text printed by this lesson, one entry per output line.
    pub fn lines(&self) -> Vec<String> {
        (self.lines)()
    }
}

impl std::fmt::Debug for Lesson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lesson").field("name", &self.name).finish()
    }
}

pub const ALL_LESSONS: [Lesson; 7] = [
    Lesson::new("bit values", bit_values::lines),
    Lesson::new("and", and_op::lines),
    Lesson::new("or", or_op::lines),
    Lesson::new("xor", xor_op::lines),
    Lesson::new("not", not_op::lines),
    Lesson::new("shift right", shift_right::lines),
    Lesson::new("shift left", shift_left::lines),
];
