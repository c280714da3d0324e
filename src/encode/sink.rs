use std::sync::{Arc, Mutex};

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ProsvgError, ProsvgResult};
use crate::render::raster::FrameRGBA;

/// Output format announced to a [`FrameSink`] by `begin`.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
}

/// Consumer of rendered frames, called by the session in output order.
///
/// Ordering contract: a frame pushed at `idx` with `repeat = n` covers indices `idx..idx + n`;
/// the next push starts at or after `idx + n`.
pub trait FrameSink: Send {
    /// First call, before any frame.
    fn begin(&mut self, cfg: SinkConfig) -> ProsvgResult<()>;
    /// Push one frame, held for `repeat` consecutive output frames (`repeat >= 1`).
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA, repeat: u32) -> ProsvgResult<()>;
    /// Last call; flush and release resources.
    fn end(&mut self) -> ProsvgResult<()>;
}

/// A frame captured by [`InMemorySink`].
#[derive(Clone, Debug)]
pub struct CapturedFrame {
    pub idx: FrameIndex,
    pub repeat: u32,
    pub frame: FrameRGBA,
}

/// Keeps every pushed frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<CapturedFrame>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format received by `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// Output frames represented, counting repeats.
    pub fn frame_count(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ProsvgResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA, repeat: u32) -> ProsvgResult<()> {
        if repeat == 0 {
            return Err(ProsvgError::encode("frame repeat must be >= 1"));
        }
        if let Some(last) = self.frames.last()
            && idx.0 < last.idx.0 + u64::from(last.repeat)
        {
            return Err(ProsvgError::encode("in-memory sink received out-of-order frame index"));
        }
        self.frames.push(CapturedFrame {
            idx,
            repeat,
            frame: frame.clone(),
        });
        Ok(())
    }

    fn end(&mut self) -> ProsvgResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// A sink shared with the caller, so it can be inspected after the session that drives it has
/// been consumed.
impl<S: FrameSink> FrameSink for Arc<Mutex<S>> {
    fn begin(&mut self, cfg: SinkConfig) -> ProsvgResult<()> {
        lock(self)?.begin(cfg)
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA, repeat: u32) -> ProsvgResult<()> {
        lock(self)?.push_frame(idx, frame, repeat)
    }

    fn end(&mut self) -> ProsvgResult<()> {
        lock(self)?.end()
    }
}

fn lock<S>(shared: &Mutex<S>) -> ProsvgResult<std::sync::MutexGuard<'_, S>> {
    shared
        .lock()
        .map_err(|_| ProsvgError::encode("shared sink lock poisoned"))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
