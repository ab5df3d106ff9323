use crate::{
    lessons::Lesson,
    pause::{Pause, PauseOutcome},
};
use anyhow::Context;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use std::io::Write;

/// Prints lessons one after the other, pausing for acknowledgement after each.
pub struct DemoRunner<W: Write, P: Pause> {
    out: W,
    pause: P,
    input_closed: bool,
}

impl<W: Write, P: Pause> DemoRunner<W, P> {
    pub fn new(out: W, pause: P) -> Self {
        Self {
            out,
            pause,
            input_closed: false,
        }
    }

    /// Runs every lesson in order. None are skipped, even once input has run out.
    pub fn run(&mut self, lessons: &[Lesson]) -> anyhow::Result<()> {
        for (index, lesson) in lessons.iter().enumerate() {
            debug!("lesson {}/{}: {}", index + 1, lessons.len(), lesson.name);
            self.print_lesson(lesson)?;
            self.wait_for_acknowledgement()?;
        }
        Ok(())
    }

    fn print_lesson(&mut self, lesson: &Lesson) -> anyhow::Result<()> {
        for line in lesson.lines() {
            writeln!(self.out, "{}", line).context("writing lesson output")?;
        }
        self.out.flush().context("flushing lesson output")?;
        Ok(())
    }

    fn wait_for_acknowledgement(&mut self) -> anyhow::Result<()> {
        // once closed there's nothing left to block on
        if self.input_closed {
            return Ok(());
        }
        if self.pause.wait()? == PauseOutcome::InputClosed {
            info!("input closed. continuing without pausing...");
            self.input_closed = true;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}
