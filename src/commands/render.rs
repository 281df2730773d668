use crate::ChordChart;
use crate::cli::{Cli, RenderArgs};
use crate::config::load_chart_config;
use crate::target::SvgFile;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders a chart configuration to SVG, on stdout or into `--output`.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, is invalid, or the
/// output file cannot be written.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let config = load_chart_config(&args.input)?;

    if let Some(output) = &args.output {
        let mut chart = ChordChart::new(SvgFile::new(output), config);
        chart.render()?;
        if !cli.quiet {
            eprintln!("Wrote {}", output.display());
        }
    } else {
        let mut chart = ChordChart::in_memory(config);
        println!("{}", chart.render()?.to_svg());
    }
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
