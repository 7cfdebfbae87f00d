//! Render sinks
//!
//! Headless backends: one logs draw calls, one records them.

use crate::{DrawCommand, RenderSink};
use tracing::trace;

/// Logs every draw call at trace level.
#[derive(Debug, Default)]
pub struct TraceSink {
    frame: u64,
    draws: usize,
}

impl TraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls issued across every frame so far.
    pub fn total_draws(&self) -> usize {
        self.draws
    }
}

impl RenderSink for TraceSink {
    fn begin_frame(&mut self, frame: u64) {
        self.frame = frame;
    }

    fn draw(&mut self, command: &DrawCommand<'_>) {
        self.draws += 1;
        match command {
            DrawCommand::Sprite {
                entity,
                image,
                source,
                dest,
                ..
            } => trace!(
                frame = self.frame,
                entity = *entity,
                image = *image,
                source = ?source,
                dest = ?dest,
                "sprite"
            ),
            DrawCommand::Text {
                entity,
                text,
                font_size,
                dest,
            } => trace!(
                frame = self.frame,
                entity = *entity,
                text = *text,
                font_size = *font_size,
                dest = ?dest,
                "text"
            ),
        }
    }
}

/// Keeps a short description of the most recent frame's draw calls.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    frames: u64,
    last_frame: Option<u64>,
    draws: Vec<String>,
}

impl FrameRecorder {
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<u64> {
        self.last_frame
    }

    /// `sprite:<entity>` / `text:<entity>` for each call of the last frame.
    pub fn draws(&self) -> &[String] {
        &self.draws
    }
}

impl RenderSink for FrameRecorder {
    fn begin_frame(&mut self, frame: u64) {
        self.frames += 1;
        self.last_frame = Some(frame);
        self.draws.clear();
    }

    fn draw(&mut self, command: &DrawCommand<'_>) {
        let kind = match command {
            DrawCommand::Sprite { .. } => "sprite",
            DrawCommand::Text { .. } => "text",
        };
        self.draws.push(format!("{kind}:{}", command.entity()));
    }
}
