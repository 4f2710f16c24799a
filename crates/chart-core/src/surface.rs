// File: crates/chart-core/src/surface.rs
// Summary: Fixed-size CPU raster surface that every renderer paints, plus PNG/RGBA export.

use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::text::TextShaper;
use crate::types::{HEIGHT, WIDTH};

/// A drawing target of fixed pixel dimensions.
///
/// Renderers query `width()`/`height()` for layout and fully repaint the
/// surface on each call, so one surface can be reused across refreshes.
pub struct Surface {
    raster: skia::Surface,
    shaper: TextShaper,
    draw_text: bool,
}

impl Surface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let raster = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        Ok(Self { raster, shaper: TextShaper::new(), draw_text: true })
    }

    /// Surface of the default dashboard size.
    pub fn with_default_size() -> Result<Self> {
        Self::new(WIDTH, HEIGHT)
    }

    /// Enable or disable label rendering. Disabled text keeps pixel output
    /// independent of the fonts installed on the host.
    pub fn with_text(mut self, draw_text: bool) -> Self {
        self.draw_text = draw_text;
        self
    }

    pub fn width(&self) -> i32 { self.raster.width() }
    pub fn height(&self) -> i32 { self.raster.height() }

    /// Borrow the canvas together with the text shaper for one render pass.
    pub fn painter(&mut self) -> Painter<'_> {
        let (width, height) = (self.raster.width(), self.raster.height());
        Painter {
            canvas: self.raster.canvas(),
            shaper: &self.shaper,
            draw_text: self.draw_text,
            width,
            height,
        }
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.raster.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode to PNG and write to `path`, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels, row-major, stride `width * 4`.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let (w, h) = (self.width(), self.height());
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w.max(0) as usize * 4;
        let mut px = vec![0u8; stride * h.max(0) as usize];
        if !self.raster.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok(px)
    }

    /// RGBA of a single pixel; out-of-bounds coordinates are an error.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Err(ChartError::ReadPixels);
        }
        let info = skia::ImageInfo::new(
            (1, 1),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut px = [0u8; 4];
        if !self.raster.read_pixels(&info, &mut px, 4, (x, y)) {
            return Err(ChartError::ReadPixels);
        }
        Ok(px)
    }
}

/// Canvas plus text shaper for the duration of one render call.
pub struct Painter<'a> {
    pub canvas: &'a skia::Canvas,
    pub(crate) shaper: &'a TextShaper,
    pub(crate) draw_text: bool,
    width: i32,
    height: i32,
}

impl Painter<'_> {
    pub fn width(&self) -> f32 { self.width as f32 }
    pub fn height(&self) -> f32 { self.height as f32 }
}
