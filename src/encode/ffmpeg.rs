use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ProsvgError, ProsvgResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::raster::FrameRGBA;

/// Options for [`FfmpegSink`].
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    /// Replace an existing file at `out_path`.
    pub overwrite: bool,
    /// Straight RGBA8 color that transparent pixels are flattened onto.
    pub background: [u8; 4],
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            background: [255, 255, 255, 255],
        }
    }
}

/// A running `ffmpeg` child fed raw RGBA on stdin.
struct Encoder {
    child: Child,
    stdin: Option<ChildStdin>,
    stderr: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
}

impl Encoder {
    fn spawn(opts: &FfmpegSinkOpts, cfg: &SinkConfig) -> ProsvgResult<Self> {
        let mut cmd = Command::new("ffmpeg");
        cmd.arg(if opts.overwrite { "-y" } else { "-n" })
            .args(["-loglevel", "error", "-f", "rawvideo", "-pix_fmt", "rgba"])
            .arg("-s")
            .arg(format!("{}x{}", cfg.width, cfg.height))
            // Rate of the raw input; must precede `-i`.
            .arg("-r")
            .arg(format!("{}/{}", cfg.fps.num, cfg.fps.den))
            .args(["-i", "pipe:0", "-an", "-c:v", "libx264", "-pix_fmt", "yuv420p"])
            .args(["-movflags", "+faststart"])
            .arg(&opts.out_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        tracing::debug!(
            out = %opts.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            "spawning ffmpeg"
        );
        let mut child = cmd
            .spawn()
            .map_err(|e| ProsvgError::encode(format!("cannot start ffmpeg: {e}")))?;

        let stdin = child.stdin.take();
        let stderr = child.stderr.take().map(|mut pipe| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                pipe.read_to_end(&mut buf)?;
                Ok(buf)
            })
        });
        if stdin.is_none() || stderr.is_none() {
            let _ = child.kill();
            return Err(ProsvgError::encode("ffmpeg pipes were not opened"));
        }
        Ok(Self {
            child,
            stdin,
            stderr,
        })
    }

    fn write(&mut self, bytes: &[u8]) -> ProsvgResult<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| ProsvgError::encode("ffmpeg stdin already closed"))?;
        stdin
            .write_all(bytes)
            .map_err(|e| ProsvgError::encode(format!("writing frame to ffmpeg: {e}")))
    }

    /// Close stdin and wait; a non-zero exit reports ffmpeg's stderr.
    fn close(mut self) -> ProsvgResult<()> {
        drop(self.stdin.take());
        let status = self
            .child
            .wait()
            .map_err(|e| ProsvgError::encode(format!("waiting for ffmpeg: {e}")))?;
        let log = match self.stderr.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| ProsvgError::encode("ffmpeg stderr reader panicked"))?
                .map_err(|e| ProsvgError::encode(format!("reading ffmpeg stderr: {e}")))?,
            None => Vec::new(),
        };
        if status.success() {
            Ok(())
        } else {
            Err(ProsvgError::encode(format!(
                "ffmpeg exited with {status}: {}",
                String::from_utf8_lossy(&log).trim()
            )))
        }
    }
}

fn check_config(cfg: &SinkConfig) -> ProsvgResult<()> {
    if cfg.fps.num == 0 || cfg.fps.den == 0 {
        return Err(ProsvgError::validation("fps must be non-zero"));
    }
    if cfg.width == 0 || cfg.height == 0 {
        return Err(ProsvgError::validation("video size must be non-zero"));
    }
    // yuv420p subsamples chroma by two in each direction.
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(ProsvgError::validation(format!(
            "video size {}x{} must be even for yuv420p",
            cfg.width, cfg.height
        )));
    }
    Ok(())
}

/// Writes an H.264 MP4 through the system `ffmpeg`.
///
/// Frames are flattened onto the background color, and a frame pushed with `repeat = n` is
/// written `n` times.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    encoder: Option<Encoder>,
    cfg: Option<SinkConfig>,
    opaque: Vec<u8>,
    next_idx: u64,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            opaque: Vec::new(),
            next_idx: 0,
        }
    }

    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> ProsvgResult<()> {
        check_config(&cfg)?;
        let out = &self.opts.out_path;
        ensure_parent_dir(out)?;
        if out.exists() && !self.opts.overwrite {
            return Err(ProsvgError::validation(format!(
                "'{}' exists and overwrite is off",
                out.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(ProsvgError::encode("ffmpeg not found on PATH"));
        }

        self.encoder = Some(Encoder::spawn(&self.opts, &cfg)?);
        self.opaque = vec![0; cfg.width as usize * cfg.height as usize * 4];
        self.cfg = Some(cfg);
        self.next_idx = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA, repeat: u32) -> ProsvgResult<()> {
        let (Some(cfg), Some(encoder)) = (self.cfg.as_ref(), self.encoder.as_mut()) else {
            return Err(ProsvgError::encode("ffmpeg sink is not running"));
        };
        if repeat == 0 {
            return Err(ProsvgError::encode("frame repeat must be >= 1"));
        }
        if idx.0 < self.next_idx {
            return Err(ProsvgError::encode(format!(
                "frame {} arrived after frame {}",
                idx.0,
                self.next_idx.saturating_sub(1)
            )));
        }
        if (frame.width, frame.height) != (cfg.width, cfg.height) {
            return Err(ProsvgError::validation(format!(
                "frame is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        if frame.premultiplied {
            flatten_onto(&mut self.opaque, &frame.data, self.opts.background)?;
        } else if frame.data.len() == self.opaque.len() {
            self.opaque.copy_from_slice(&frame.data);
        } else {
            return Err(ProsvgError::validation("frame data does not match its size"));
        }

        for _ in 0..repeat {
            encoder.write(&self.opaque)?;
        }
        self.next_idx = idx.0 + u64::from(repeat);
        Ok(())
    }

    fn end(&mut self) -> ProsvgResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| ProsvgError::encode("ffmpeg sink is not running"))?;
        self.cfg = None;
        encoder.close()?;
        tracing::info!(out = %self.opts.out_path.display(), frames = self.next_idx, "mp4 written");
        Ok(())
    }
}

/// Composite premultiplied `src` over an opaque `background` into `dst`.
fn flatten_onto(dst: &mut [u8], src: &[u8], background: [u8; 4]) -> ProsvgResult<()> {
    if dst.len() != src.len() || !src.len().is_multiple_of(4) {
        return Err(ProsvgError::validation(
            "flatten needs two rgba8 buffers of equal length",
        ));
    }
    let bg = background.map(u16::from);
    for (out, px) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let cover = px[3];
        if cover == 255 {
            out.copy_from_slice(px);
            continue;
        }
        let rest = 255 - u16::from(cover);
        for c in 0..3 {
            out[c] = (u16::from(px[c]) + mul_div255_u16(bg[c], rest)).min(255) as u8;
        }
        out[3] = 255;
    }
    Ok(())
}

/// Create the directory that will hold `path`.
pub fn ensure_parent_dir(path: &Path) -> ProsvgResult<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create directory '{}'", dir.display()))?;
    }
    Ok(())
}

/// Whether `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
