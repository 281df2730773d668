use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single problem found while validating a chart configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    /// A required field is absent or empty.
    Missing(&'static str),
    /// `matrix[row]` has a different length than the matrix itself.
    NonSquareRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A weight is negative or not a finite number.
    InvalidWeight { row: usize, col: usize, value: f64 },
    /// `name_by_index` does not have one entry per matrix index.
    NameCountMismatch { names: usize, size: usize },
    /// `index_by_name` disagrees with `name_by_index`.
    IndexByNameMismatch {
        name: String,
        expected: Option<usize>,
        actual: Option<usize>,
    },
    /// A dimension that must be strictly positive is not.
    NonPositive { field: &'static str, value: f64 },
    /// A color field does not hold a `#rgb` or `#rrggbb` value.
    InvalidColor { field: &'static str, value: String },
    /// A file name field contains a path separator.
    InvalidFileName { field: &'static str, value: String },
    /// The surface leaves no room for the ring inside the label margin.
    SurfaceTooSmall { outer_radius: f64, margin: f64 },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "{field} is missing"),
            Self::NonSquareRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "matrix[{row}] has {actual} entries, expected {expected} (matrix must be square)"
            ),
            Self::InvalidWeight { row, col, value } => write!(
                f,
                "matrix[{row}][{col}] must be a finite non-negative number, got {value}"
            ),
            Self::NameCountMismatch { names, size } => write!(
                f,
                "name_by_index has {names} names but the matrix has {size} rows"
            ),
            Self::IndexByNameMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "index_by_name[{name:?}] is {}, expected {}",
                fmt_index(*actual),
                fmt_index(*expected)
            ),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be a positive number, got {value}")
            }
            Self::InvalidColor { field, value } => {
                write!(f, "{field} must be a #rgb or #rrggbb color, got {value:?}")
            }
            Self::InvalidFileName { field, value } => write!(
                f,
                "{field} must be a file name without path separators, got {value:?}"
            ),
            Self::SurfaceTooSmall {
                outer_radius,
                margin,
            } => write!(
                f,
                "width/height too small: outer radius {outer_radius} must exceed the {margin} label margin"
            ),
        }
    }
}

fn fmt_index(index: Option<usize>) -> String {
    index.map_or_else(|| "absent".to_string(), |i| i.to_string())
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum ChordChartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid chart configuration: {}", join_issues(.0))]
    InvalidConfig(Vec<ConfigIssue>),

    #[error("Nothing to export: render the chart first or pass a surface")]
    NoSurface,

    #[error("Failed to parse SVG markup: {0}")]
    SvgParse(String),

    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ChordChartError {
    /// Stable variant name, used in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidConfig(_) => "InvalidConfig",
            Self::NoSurface => "NoSurface",
            Self::SvgParse(_) => "SvgParse",
            Self::Rasterize(_) => "Rasterize",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonParse(_) => "JsonParse",
        }
    }

    /// Validation issues carried by this error, empty for every other kind.
    #[must_use]
    pub fn issues(&self) -> &[ConfigIssue] {
        match self {
            Self::InvalidConfig(issues) => issues,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, ChordChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
