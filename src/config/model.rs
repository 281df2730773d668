use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::layout::{GroupOrder, SelfRelationships};

/// Font size used when the configuration does not set one.
pub const DEFAULT_FONT_SIZE: f64 = 20.0;

/// Base name of the exported image when none is given.
pub const DEFAULT_EXPORT_NAME: &str = "chordDependencyChart";

/// Default raster size of the exported image, in pixels.
pub const DEFAULT_EXPORT_SIZE: u32 = 1000;

/// Everything needed to draw one chord diagram.
///
/// Missing fields deserialize to empty or zero values; validation reports
/// them all at once rather than failing on the first one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Square weight matrix; `matrix[i][j]` is the weight from entity i to j.
    #[serde(default)]
    pub matrix: Vec<Vec<f64>>,

    /// Display name of each matrix index.
    #[serde(default, alias = "nameByIndex")]
    pub name_by_index: Vec<String>,

    /// Inverse of `name_by_index`.
    #[serde(default, alias = "indexByName")]
    pub index_by_name: IndexMap<String, usize>,

    /// Surface width in pixels.
    #[serde(default)]
    pub width: f64,

    /// Surface height in pixels.
    #[serde(default)]
    pub height: f64,

    /// Label font size.
    #[serde(default = "default_font_size", alias = "fontSize")]
    pub font_size: f64,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            matrix: Vec::new(),
            name_by_index: Vec::new(),
            index_by_name: IndexMap::new(),
            width: 0.0,
            height: 0.0,
            font_size: DEFAULT_FONT_SIZE,
            layout: LayoutConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Build a configuration, deriving `index_by_name` from the names.
    #[must_use]
    pub fn new(matrix: Vec<Vec<f64>>, name_by_index: Vec<String>, width: f64, height: f64) -> Self {
        let index_by_name = name_by_index
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            matrix,
            name_by_index,
            index_by_name,
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    /// Number of entities (matrix rows).
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.matrix.len()
    }

    /// Look up an entity index by name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_by_name.get(name).copied()
    }

    #[must_use]
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.name_by_index.get(index).map(String::as_str)
    }
}

/// Layout choices [layout].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Draw diagonal entries as self-ribbons (default: show).
    #[serde(default)]
    pub self_relationships: SelfRelationships,

    /// Order of groups around the circle (default: descending).
    #[serde(default)]
    pub group_order: GroupOrder,
}

/// PNG export settings [export].
///
/// The drawing is scaled uniformly to fit `width` × `height` and anchored at
/// the top-left corner; leftover area is filled with `background`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// Raster width in pixels.
    #[serde(default = "default_export_size")]
    pub width: u32,

    /// Raster height in pixels.
    #[serde(default = "default_export_size")]
    pub height: u32,

    /// Background fill, as `#rrggbb` or `#rgb`.
    #[serde(default = "default_background")]
    pub background: String,

    /// File name without the `.png` extension.
    #[serde(default = "default_export_name")]
    pub name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_EXPORT_SIZE,
            height: DEFAULT_EXPORT_SIZE,
            background: default_background(),
            name: default_export_name(),
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

const fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

const fn default_export_size() -> u32 {
    DEFAULT_EXPORT_SIZE
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_export_name() -> String {
    DEFAULT_EXPORT_NAME.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
