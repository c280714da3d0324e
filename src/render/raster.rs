use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{ProsvgError, ProsvgResult};
use crate::foundation::math::demultiply_rgba8_in_place;

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by [`Rasterizer`] are **premultiplied alpha**; the flag makes that explicit
/// at sink boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha RGBA8 bytes.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut data = self.data.clone();
        if self.premultiplied {
            demultiply_rgba8_in_place(&mut data);
        }
        data
    }

    /// Straight-alpha RGBA at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let mut px = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        if self.premultiplied {
            demultiply_rgba8_in_place(&mut px);
        }
        Some(px)
    }

    pub fn save_png(&self, path: &Path) -> ProsvgResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png to '{}'", path.display()))?;
        Ok(())
    }
}

/// Converts SVG snapshots into pixels with `usvg` + `resvg`.
///
/// System fonts are loaded once, when the rasterizer is created.
pub struct Rasterizer {
    options: usvg::Options<'static>,
    width: u32,
    height: u32,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fonts", &self.options.fontdb.len())
            .finish()
    }
}

impl Rasterizer {
    /// Output size is the canvas size times `scale`, rounded up.
    pub fn new(canvas: Canvas, scale: f64) -> ProsvgResult<Self> {
        let (width, height) = canvas.scaled(scale)?;
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(fonts = db.len(), width, height, "rasterizer ready");
        let options = usvg::Options {
            fontdb: Arc::new(db),
            ..Default::default()
        };
        Ok(Self {
            options,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[tracing::instrument(skip(self, svg), fields(len = svg.len()))]
    pub fn rasterize(&self, svg: &str) -> ProsvgResult<FrameRGBA> {
        let tree = usvg::Tree::from_str(svg, &self.options).context("parse scene svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(self.width, self.height)
            .ok_or_else(|| ProsvgError::render("failed to allocate frame pixmap"))?;

        let size = tree.size();
        let sx = (self.width as f32) / size.width();
        let sy = (self.height as f32) / size.height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

        resvg::render(&tree, xform, &mut pixmap.as_mut());
        Ok(FrameRGBA {
            width: self.width,
            height: self.height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
