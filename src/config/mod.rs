mod loader;
mod model;
mod validation;

pub use loader::{ChartConfigLoader, ConfigFormat, FileSystem, RealFileSystem, load_chart_config};
pub use model::{
    ChartConfig, DEFAULT_EXPORT_NAME, DEFAULT_EXPORT_SIZE, DEFAULT_FONT_SIZE, ExportConfig,
    LayoutConfig,
};
pub use validation::{collect_config_issues, export_name_issue, validate_chart_config};

pub use crate::layout::{GroupOrder, SelfRelationships};
