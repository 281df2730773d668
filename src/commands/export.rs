use crate::ChordChart;
use crate::cli::{Cli, ExportArgs};
use crate::config::{ChartConfig, load_chart_config};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_export(args: &ExportArgs, cli: &Cli) -> i32 {
    match run_export_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders a chart configuration and saves it as `<out_dir>/<name>.png`.
///
/// # Errors
/// Returns an error if the configuration is invalid, rasterization fails, or
/// the image cannot be written.
pub fn run_export_impl(args: &ExportArgs, cli: &Cli) -> Result<()> {
    let mut config = load_chart_config(&args.input)?;
    apply_export_overrides(&mut config, args);

    let mut chart = ChordChart::in_memory(config);
    chart.render()?;
    let export = chart.save_as_png(None, args.name.as_deref())?.wait()?;
    let path = export.save_in(&args.out_dir)?;

    if !cli.quiet {
        eprintln!("Saved {}", path.display());
    }
    Ok(())
}

/// Apply command-line overrides to the `[export]` section.
pub fn apply_export_overrides(config: &mut ChartConfig, args: &ExportArgs) {
    if let Some(width) = args.width {
        config.export.width = width;
    }
    if let Some(height) = args.height {
        config.export.height = height;
    }
    if let Some(background) = &args.background {
        config.export.background.clone_from(background);
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
