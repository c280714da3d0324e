use crate::foundation::error::{ProsvgError, ProsvgResult};

/// Zero-based index of an output frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frame rate as the rational `num / den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32,
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ProsvgResult<Self> {
        match (num, den) {
            (0, _) => Err(ProsvgError::validation("fps numerator must be > 0")),
            (_, 0) => Err(ProsvgError::validation("fps denominator must be > 0")),
            _ => Ok(Self { num, den }),
        }
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds per frame; the `dt` of one timeline step.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        frames as f64 * self.frame_duration_secs()
    }

    /// Whole frames that fit in `secs`; negative input gives 0.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Drawing area in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> ProsvgResult<Self> {
        if width == 0 || height == 0 {
            return Err(ProsvgError::validation(format!(
                "canvas {width}x{height} has an empty side"
            )));
        }
        Ok(Self { width, height })
    }

    /// Pixel size of the canvas rendered at `scale`, rounded up.
    pub fn scaled(self, scale: f64) -> ProsvgResult<(u32, u32)> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ProsvgError::validation("render scale must be finite and > 0"));
        }
        let px = |side: u32| (f64::from(side) * scale).ceil().max(1.0) as u32;
        Ok((px(self.width), px(self.height)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
