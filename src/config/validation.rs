//! Configuration semantic validation.
//!
//! Checks that a chart configuration is complete and internally consistent
//! before anything is drawn. Every problem is collected so callers see the
//! full list in one error.

use crate::error::{ChordChartError, ConfigIssue, Result};
use crate::layout::{ChartGeometry, LABEL_MARGIN};
use crate::output::svg::ChartColor;

use super::ChartConfig;

/// Validates a chart configuration.
///
/// # Errors
/// Returns [`ChordChartError::InvalidConfig`] listing every missing or
/// invalid field.
pub fn validate_chart_config(config: &ChartConfig) -> Result<()> {
    let issues = collect_config_issues(config);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ChordChartError::InvalidConfig(issues))
    }
}

/// Collects every problem in `config`, in field order.
#[must_use]
pub fn collect_config_issues(config: &ChartConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    check_required(config, &mut issues);
    check_matrix(config, &mut issues);
    check_names(config, &mut issues);
    check_dimensions(config, &mut issues);
    check_export(config, &mut issues);
    issues
}

fn check_required(config: &ChartConfig, issues: &mut Vec<ConfigIssue>) {
    if config.matrix.is_empty() {
        issues.push(ConfigIssue::Missing("matrix"));
    }
    if config.name_by_index.is_empty() {
        issues.push(ConfigIssue::Missing("name_by_index"));
    }
    if config.index_by_name.is_empty() {
        issues.push(ConfigIssue::Missing("index_by_name"));
    }
}

fn check_matrix(config: &ChartConfig, issues: &mut Vec<ConfigIssue>) {
    let size = config.matrix.len();
    for (row, values) in config.matrix.iter().enumerate() {
        if values.len() != size {
            issues.push(ConfigIssue::NonSquareRow {
                row,
                expected: size,
                actual: values.len(),
            });
        }
        for (col, &value) in values.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                issues.push(ConfigIssue::InvalidWeight { row, col, value });
            }
        }
    }
}

fn check_names(config: &ChartConfig, issues: &mut Vec<ConfigIssue>) {
    let size = config.matrix.len();
    let names = &config.name_by_index;
    if size > 0 && !names.is_empty() && names.len() != size {
        issues.push(ConfigIssue::NameCountMismatch {
            names: names.len(),
            size,
        });
    }

    if names.is_empty() || config.index_by_name.is_empty() {
        return;
    }

    for (index, name) in names.iter().enumerate() {
        let actual = config.index_of(name);
        if actual != Some(index) {
            issues.push(ConfigIssue::IndexByNameMismatch {
                name: name.clone(),
                expected: Some(index),
                actual,
            });
        }
    }

    for (name, &index) in &config.index_by_name {
        if !names.contains(name) {
            issues.push(ConfigIssue::IndexByNameMismatch {
                name: name.clone(),
                expected: None,
                actual: Some(index),
            });
        }
    }
}

fn check_dimensions(config: &ChartConfig, issues: &mut Vec<ConfigIssue>) {
    let is_positive = |value: f64| value.is_finite() && value > 0.0;

    let sized = is_positive(config.width) && is_positive(config.height);
    for (field, value) in [
        ("width", config.width),
        ("height", config.height),
        ("font_size", config.font_size),
    ] {
        if !is_positive(value) {
            issues.push(ConfigIssue::NonPositive { field, value });
        }
    }

    if sized {
        let geometry = ChartGeometry::new(config.width, config.height);
        if !geometry.is_drawable() {
            issues.push(ConfigIssue::SurfaceTooSmall {
                outer_radius: geometry.outer_radius,
                margin: LABEL_MARGIN,
            });
        }
    }
}

fn check_export(config: &ChartConfig, issues: &mut Vec<ConfigIssue>) {
    let export = &config.export;
    for (field, value) in [("export.width", export.width), ("export.height", export.height)] {
        if value == 0 {
            issues.push(ConfigIssue::NonPositive {
                field,
                value: f64::from(value),
            });
        }
    }
    if ChartColor::from_hex(&export.background).is_none() {
        issues.push(ConfigIssue::InvalidColor {
            field: "export.background",
            value: export.background.clone(),
        });
    }
    issues.extend(export_name_issue(&export.name));
}

/// Problem with an export file name, if any.
///
/// The name must be non-blank and must not contain `/` or `\`, so the image
/// always lands inside the directory it is saved in.
#[must_use]
pub fn export_name_issue(name: &str) -> Option<ConfigIssue> {
    if name.trim().is_empty() {
        Some(ConfigIssue::Missing("export.name"))
    } else if name.contains(['/', '\\']) {
        Some(ConfigIssue::InvalidFileName {
            field: "export.name",
            value: name.to_string(),
        })
    } else {
        None
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
