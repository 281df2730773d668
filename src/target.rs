//! Destinations a chart draws into.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::surface::DrawingSurface;

/// A drawing destination handed to the chart explicitly.
pub trait RenderTarget {
    /// Replace whatever the target shows with `surface`.
    ///
    /// # Errors
    /// Returns an error if the target cannot accept the surface.
    fn mount(&mut self, surface: &DrawingSurface) -> Result<()>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn mount(&mut self, surface: &DrawingSurface) -> Result<()> {
        (**self).mount(surface)
    }
}

/// In-memory SVG document holding the most recently mounted markup.
#[derive(Debug, Default, Clone)]
pub struct SvgDocument {
    markup: Option<String>,
    mounts: usize,
}

impl SvgDocument {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            markup: None,
            mounts: 0,
        }
    }

    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    /// How many surfaces have been mounted so far.
    #[must_use]
    pub const fn mount_count(&self) -> usize {
        self.mounts
    }
}

impl RenderTarget for SvgDocument {
    fn mount(&mut self, surface: &DrawingSurface) -> Result<()> {
        self.markup = Some(surface.to_svg());
        self.mounts += 1;
        Ok(())
    }
}

/// SVG file rewritten on every mount.
#[derive(Debug, Clone)]
pub struct SvgFile {
    path: PathBuf,
}

impl SvgFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderTarget for SvgFile {
    fn mount(&mut self, surface: &DrawingSurface) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, surface.serialize())?;
        debug!(path = %self.path.display(), "wrote SVG");
        Ok(())
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
