use std::fs;

use crate::cli::InitArgs;
use crate::{ChordChartError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes an example chart configuration.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ChordChartError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# chord-chart configuration file

# Surface size in pixels. The ring needs min(width, height) / 2 > 124.
width = 600
height = 600

# Label font size (default: 20)
font_size = 20

# One name per matrix row
name_by_index = ["app", "cli", "core", "util"]

# matrix[i][j] is the weight of the relationship from entity i to entity j.
# Must be square and non-negative.
matrix = [
    [0, 4, 6, 1],
    [0, 0, 3, 2],
    [0, 0, 0, 5],
    [0, 0, 0, 0],
]

# Inverse of name_by_index
[index_by_name]
app = 0
cli = 1
core = 2
util = 3

[layout]
# Draw diagonal entries as self-ribbons: "show" or "hide"
self_relationships = "show"
# Order of groups around the circle: "descending" (by total weight) or "index"
group_order = "descending"

[export]
# Raster size of the exported PNG
width = 1000
height = 1000
background = "#ffffff"
# File name without the .png extension
name = "chordDependencyChart"
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
