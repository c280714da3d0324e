//! Playback driver.
//!
//! A [`RenderSession`] owns a [`Scene`] and the sinks attached to it. `play` steps the requested
//! shapes frame by frame and pushes one snapshot per frame; `pause` holds the current snapshot.
//! The caller queues verbs on shapes between `play` calls.

use std::path::Path;

use anyhow::Context;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ProsvgError, ProsvgResult};
use crate::render::raster::{FrameRGBA, Rasterizer};
use crate::render::svg::SvgDocument;
use crate::scene::{Scene, ShapeId};

/// Options controlling output timing and resolution.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionOpts {
    pub fps: Fps,
    /// Output pixels per canvas unit.
    pub scale: f64,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            scale: 1.0,
        }
    }
}

/// Handle to a sink attached with [`RenderSession::attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SinkId(pub usize);

/// Totals reported by [`RenderSession::finish`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionStats {
    /// Output frames, counting held (paused) frames.
    pub frames: u64,
    /// Frames that were rasterized.
    pub frames_rendered: u64,
    /// `frames` converted to seconds.
    pub seconds: f64,
}

/// Drives a [`Scene`] and streams snapshots into sinks.
pub struct RenderSession {
    scene: Scene,
    opts: SessionOpts,
    document: SvgDocument,
    rasterizer: Option<Rasterizer>,
    sinks: Vec<(SinkId, Box<dyn FrameSink>)>,
    next_sink: usize,
    running: bool,
    stats: SessionStats,
}

impl std::fmt::Debug for RenderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderSession")
            .field("opts", &self.opts)
            .field("shapes", &self.scene.len())
            .field("sinks", &self.sinks.len())
            .field("running", &self.running)
            .field("stats", &self.stats)
            .finish()
    }
}

impl RenderSession {
    pub fn new(scene: Scene, opts: SessionOpts) -> ProsvgResult<Self> {
        Fps::new(opts.fps.num, opts.fps.den)?;
        scene.canvas().scaled(opts.scale)?;
        let canvas = scene.canvas();
        Ok(Self {
            document: SvgDocument::new(canvas.width, canvas.height),
            scene,
            opts,
            rasterizer: None,
            sinks: Vec::new(),
            next_sink: 0,
            running: true,
            stats: SessionStats::default(),
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn opts(&self) -> SessionOpts {
        self.opts
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Output size in pixels.
    pub fn frame_size(&self) -> ProsvgResult<(u32, u32)> {
        self.scene.canvas().scaled(self.opts.scale)
    }

    /// Start a sink; it receives every frame emitted from now on.
    pub fn attach(&mut self, mut sink: impl FrameSink + 'static) -> ProsvgResult<SinkId> {
        let (width, height) = self.frame_size()?;
        sink.begin(SinkConfig {
            width,
            height,
            fps: self.opts.fps,
        })?;
        let id = SinkId(self.next_sink);
        self.next_sink += 1;
        self.sinks.push((id, Box::new(sink)));
        tracing::debug!(sink = id.0, width, height, "sink attached");
        Ok(id)
    }

    /// Step `ids` until the longest of their timelines has run, one snapshot per frame.
    ///
    /// Renders `floor(run_time · fps)` frames, then resets those timelines: shapes keep the state
    /// of the last rendered frame and unfired completions are dropped. A stopped session does
    /// nothing.
    #[tracing::instrument(skip(self, ids), fields(shapes = ids.len()))]
    pub fn play(&mut self, ids: &[ShapeId]) -> ProsvgResult<&mut Self> {
        if !self.running {
            tracing::debug!("play ignored: session stopped");
            return Ok(self);
        }
        if let Some(missing) = ids.iter().find(|id| !self.scene.contains(**id)) {
            return Err(ProsvgError::validation(format!(
                "play: unknown shape id {}",
                missing.0
            )));
        }

        let run_time = ids
            .iter()
            .filter_map(|id| self.scene.shape(*id))
            .map(|s| s.run_time())
            .fold(0.0, f64::max);
        let fps = self.opts.fps;
        let dt = fps.frame_duration_secs();
        let frames = fps.secs_to_frames_floor(run_time);
        tracing::debug!(run_time, frames, "play");

        for _ in 0..frames {
            for id in ids {
                if let Some(shape) = self.scene.shape_mut(*id) {
                    shape.advance(dt);
                }
            }
            self.emit(1)?;
        }
        for id in ids {
            if let Some(shape) = self.scene.shape_mut(*id) {
                shape.reset_timeline();
            }
        }
        Ok(self)
    }

    /// Hold the current snapshot for `secs`.
    #[tracing::instrument(skip(self))]
    pub fn pause(&mut self, secs: f64) -> ProsvgResult<&mut Self> {
        if !self.running {
            return Ok(self);
        }
        if !secs.is_finite() || secs < 0.0 {
            return Err(ProsvgError::validation("pause duration must be finite and >= 0"));
        }
        let frames = self.opts.fps.secs_to_frames_floor(secs);
        tracing::debug!(frames, "pause");
        if frames > 0 {
            let repeat = u32::try_from(frames)
                .map_err(|_| ProsvgError::validation("pause duration too long"))?;
            self.emit(repeat)?;
        }
        Ok(self)
    }

    /// Ignore `play` and `pause` until [`RenderSession::resume`].
    pub fn stop(&mut self) -> &mut Self {
        self.running = false;
        self
    }

    pub fn resume(&mut self) -> &mut Self {
        self.running = true;
        self
    }

    /// Current scene as SVG text.
    pub fn snapshot_svg(&mut self) -> String {
        self.document.sync(&self.scene);
        self.document.to_svg()
    }

    /// Current scene as pixels.
    pub fn snapshot(&mut self) -> ProsvgResult<FrameRGBA> {
        let svg = self.snapshot_svg();
        self.rasterizer()?.rasterize(&svg)
    }

    /// Write the current scene to `path`: a PNG image for `.png`, SVG text for anything else.
    pub fn save(&mut self, path: impl AsRef<Path>) -> ProsvgResult<()> {
        let path = path.as_ref();
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        ensure_parent_dir(path)?;
        if is_png {
            self.snapshot()?.save_png(path)?;
        } else {
            let svg = self.snapshot_svg();
            std::fs::write(path, svg)
                .with_context(|| format!("write svg to '{}'", path.display()))?;
        }
        tracing::info!(path = %path.display(), png = is_png, "snapshot saved");
        Ok(())
    }

    /// End one sink; the others keep receiving frames.
    pub fn finish_sink(&mut self, id: SinkId) -> ProsvgResult<()> {
        let pos = self
            .sinks
            .iter()
            .position(|(i, _)| *i == id)
            .ok_or_else(|| ProsvgError::validation(format!("unknown sink id {}", id.0)))?;
        let (_, mut sink) = self.sinks.remove(pos);
        sink.end()
    }

    /// End every remaining sink and report totals. The first sink error is returned after all
    /// sinks have been ended.
    pub fn finish(mut self) -> ProsvgResult<SessionStats> {
        let mut first_err = None;
        for (id, mut sink) in self.sinks.drain(..) {
            if let Err(err) = sink.end() {
                tracing::warn!(sink = id.0, %err, "sink failed to finish");
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => {
                tracing::info!(frames = self.stats.frames, seconds = self.stats.seconds, "session finished");
                Ok(self.stats)
            }
        }
    }

    fn rasterizer(&mut self) -> ProsvgResult<&Rasterizer> {
        if self.rasterizer.is_none() {
            self.rasterizer = Some(Rasterizer::new(self.scene.canvas(), self.opts.scale)?);
        }
        self.rasterizer
            .as_ref()
            .ok_or_else(|| ProsvgError::render("rasterizer unavailable"))
    }

    /// Push the current snapshot to every sink, held for `repeat` frames.
    fn emit(&mut self, repeat: u32) -> ProsvgResult<()> {
        let idx = FrameIndex(self.stats.frames);
        if !self.sinks.is_empty() {
            let frame = self.snapshot()?;
            for (_, sink) in &mut self.sinks {
                sink.push_frame(idx, &frame, repeat)?;
            }
            self.stats.frames_rendered += 1;
        }
        self.stats.frames += u64::from(repeat);
        self.stats.seconds = self.opts.fps.frames_to_secs(self.stats.frames);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
