pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod output;
pub mod surface;
pub mod target;

pub use chart::ChordChart;
pub use config::{ChartConfig, ExportConfig, LayoutConfig};
pub use error::{ChordChartError, ConfigIssue, Result};
pub use export::{PendingExport, PngExport};
pub use surface::DrawingSurface;
pub use target::{RenderTarget, SvgDocument, SvgFile};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
