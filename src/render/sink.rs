//! Frame presenters

use std::io::Write;

use super::frame::Frame;
use crate::error::OverlayError;

/// Receives every rendered frame
pub trait FrameSink: Send {
    fn present(&mut self, frame: &Frame) -> Result<(), OverlayError>;
}

/// Plain text, one line per timer, written only when the text changes
pub struct TextSink<W> {
    out: W,
    last: Option<Frame>,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for TextSink<W> {
    fn present(&mut self, frame: &Frame) -> Result<(), OverlayError> {
        if self.last.as_ref().is_some_and(|last| last.same_text(frame)) {
            return Ok(());
        }
        for line in &frame.timers {
            writeln!(self.out, "{}", line.text)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        self.last = Some(frame.clone());
        Ok(())
    }
}

/// One JSON document per changed frame
pub struct JsonSink<W> {
    out: W,
    last: Option<Frame>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for JsonSink<W> {
    fn present(&mut self, frame: &Frame) -> Result<(), OverlayError> {
        if self.last.as_ref() == Some(frame) {
            return Ok(());
        }
        serde_json::to_writer(&mut self.out, frame)?;
        writeln!(self.out)?;
        self.out.flush()?;
        self.last = Some(frame.clone());
        Ok(())
    }
}
