//! PNG export of rendered surfaces.
//!
//! Rasterization runs on a worker thread. The caller gets a
//! [`PendingExport`] back immediately and collects the outcome with
//! [`PendingExport::wait`].

use std::fs;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use resvg::{tiny_skia, usvg};
use tracing::{debug, warn};

use crate::config::{ExportConfig, export_name_issue};
use crate::error::{ChordChartError, ConfigIssue, Result};
use crate::output::svg::ChartColor;
use crate::surface::DrawingSurface;

/// File name of an export called `name`.
#[must_use]
pub fn png_file_name(name: &str) -> String {
    format!("{name}.png")
}

/// A finished PNG image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngExport {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl PngExport {
    /// Write the image into `dir` under its file name.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        debug!(path = %path.display(), bytes = self.bytes.len(), "saved PNG");
        Ok(path)
    }
}

/// An export still being rasterized.
#[derive(Debug)]
pub struct PendingExport {
    file_name: String,
    handle: JoinHandle<Result<PngExport>>,
}

impl PendingExport {
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether the worker is done; [`wait`](Self::wait) will not block once true.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until rasterization completes.
    ///
    /// # Errors
    /// Returns the rasterization failure, or [`ChordChartError::Rasterize`]
    /// if the worker panicked.
    pub fn wait(self) -> Result<PngExport> {
        self.handle
            .join()
            .map_err(|_| ChordChartError::Rasterize("export worker panicked".to_string()))?
    }
}

/// Snapshot `surface` and start rasterizing it with `options`.
///
/// # Errors
/// Returns an error immediately if the export size, background or file name
/// is invalid, or if the worker thread cannot be started.
pub fn start_export(surface: &DrawingSurface, options: &ExportConfig) -> Result<PendingExport> {
    let background = checked_background(options)?;
    let (width, height) = (options.width, options.height);
    let markup = surface.serialize();
    let file_name = png_file_name(&options.name);

    let worker_name = file_name.clone();
    let handle = thread::Builder::new()
        .name("chord-chart-export".to_string())
        .spawn(move || {
            let result = rasterize(&markup, width, height, background);
            match &result {
                Ok(bytes) => debug!(file = %worker_name, bytes = bytes.len(), "rasterized"),
                Err(e) => warn!(file = %worker_name, error = %e, "rasterization failed"),
            }
            result.map(|bytes| PngExport {
                file_name: worker_name,
                width,
                height,
                bytes,
            })
        })?;

    Ok(PendingExport { file_name, handle })
}

/// Background color of a valid export; every invalid setting is reported.
fn checked_background(options: &ExportConfig) -> Result<ChartColor> {
    let mut issues = Vec::new();
    for (field, value) in [("export.width", options.width), ("export.height", options.height)] {
        if value == 0 {
            issues.push(ConfigIssue::NonPositive {
                field,
                value: f64::from(value),
            });
        }
    }
    let background = ChartColor::from_hex(&options.background);
    if background.is_none() {
        issues.push(ConfigIssue::InvalidColor {
            field: "export.background",
            value: options.background.clone(),
        });
    }
    issues.extend(export_name_issue(&options.name));
    match background {
        Some(color) if issues.is_empty() => Ok(color),
        _ => Err(ChordChartError::InvalidConfig(issues)),
    }
}

/// Rasterize SVG markup into a `width` × `height` PNG filled with `background`.
///
/// The drawing is scaled uniformly to fit and anchored at the top-left corner;
/// any leftover area keeps the background color.
///
/// # Errors
/// Returns an error if the markup cannot be parsed, the pixmap cannot be
/// allocated, or PNG encoding fails.
#[allow(clippy::cast_precision_loss)] // Raster sizes are far below f32 precision limits
pub fn rasterize(markup: &str, width: u32, height: u32, background: ChartColor) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(markup, &options)
        .map_err(|e| ChordChartError::SvgParse(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        ChordChartError::Rasterize(format!("cannot allocate a {width}x{height} pixmap"))
    })?;
    pixmap.fill(tiny_skia::Color::from_rgba8(
        background.r,
        background.g,
        background.b,
        255,
    ));

    let size = tree.size();
    let scale = (width as f32 / size.width()).min(height as f32 / size.height());
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|e| ChordChartError::Rasterize(e.to_string()))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
