use anyhow::Context;
use std::io::BufRead;

/// How a pause between lessons ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOutcome {
    /// A line was available (its content is ignored)
    Acknowledged,
    /// Input is exhausted. Treated as a pass-through so the remaining lessons still print.
    InputClosed,
}

/// Blocking acknowledgement gate run after each lesson.
pub trait Pause {
    fn wait(&mut self) -> anyhow::Result<PauseOutcome>;
}

/// Reads and discards one line from `input`. Content isn't decoded, so any bytes will do.
pub struct LinePause<R: BufRead> {
    input: R,
    line: Vec<u8>,
}

impl<R: BufRead> LinePause<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> Pause for LinePause<R> {
    fn wait(&mut self) -> anyhow::Result<PauseOutcome> {
        self.line.clear();
        let bytes_read = self
            .input
            .read_until(b'\n', &mut self.line)
            .context("reading pause input")?;
        if bytes_read == 0 {
            Ok(PauseOutcome::InputClosed)
        } else {
            Ok(PauseOutcome::Acknowledged)
        }
    }
}

/// Never blocks.
#[cfg(test)]
pub struct NoPause;

#[cfg(test)]
impl Pause for NoPause {
    fn wait(&mut self) -> anyhow::Result<PauseOutcome> {
        Ok(PauseOutcome::Acknowledged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_pause_consumes_one_line_per_wait() {
        let mut pause = LinePause::new(Cursor::new("first\n\nthird"));
        assert_eq!(pause.wait().unwrap(), PauseOutcome::Acknowledged);
        assert_eq!(pause.wait().unwrap(), PauseOutcome::Acknowledged);
        // last line without a trailing newline still counts
        assert_eq!(pause.wait().unwrap(), PauseOutcome::Acknowledged);
        assert_eq!(pause.wait().unwrap(), PauseOutcome::InputClosed);
    }

    #[test]
    fn line_pause_on_empty_input_is_closed() {
        let mut pause = LinePause::new(Cursor::new(""));
        assert_eq!(pause.wait().unwrap(), PauseOutcome::InputClosed);
        assert_eq!(pause.wait().unwrap(), PauseOutcome::InputClosed);
    }

    #[test]
    fn line_pause_ignores_non_utf8_content() {
        let mut pause = LinePause::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        assert_eq!(pause.wait().unwrap(), PauseOutcome::Acknowledged);
        assert_eq!(pause.wait().unwrap(), PauseOutcome::InputClosed);
    }
}
