use crate::cli::{Cli, ValidateArgs};
use crate::config::{ChartConfig, SelfRelationships, collect_config_issues, load_chart_config};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match run_validate_impl(args, cli) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_CONFIG_ERROR,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Checks a chart configuration and reports every issue found.
///
/// Returns `Ok(true)` when the configuration is valid.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn run_validate_impl(args: &ValidateArgs, cli: &Cli) -> Result<bool> {
    let config = load_chart_config(&args.input)?;
    let issues = collect_config_issues(&config);

    if issues.is_empty() {
        if !cli.quiet {
            let relationships = drawn_relationships(&config);
            println!(
                "{}: OK ({} entities, {relationships} relationships)",
                args.input.display(),
                config.entity_count()
            );
        }
        return Ok(true);
    }

    eprintln!(
        "{}: {} configuration issue(s)",
        args.input.display(),
        issues.len()
    );
    for issue in &issues {
        eprintln!("  - {issue}");
    }
    Ok(false)
}

/// Number of ribbons the chart will draw.
fn drawn_relationships(config: &ChartConfig) -> usize {
    let hide_self = config.layout.self_relationships == SelfRelationships::Hide;
    config
        .matrix
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &weight)| (i, j, weight)))
        .filter(|&(i, j, weight)| weight > 0.0 && !(hide_self && i == j))
        .count()
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
