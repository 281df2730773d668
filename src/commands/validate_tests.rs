use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::commands::generate_config_template;

fn quiet_cli() -> Cli {
    Cli::try_parse_from(["chord-chart", "-q", "init"]).unwrap()
}

#[test]
fn valid_template_passes() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("chart.toml");
    std::fs::write(&input, generate_config_template()).unwrap();
    let args = ValidateArgs { input };
    assert!(run_validate_impl(&args, &quiet_cli()).unwrap());
    assert_eq!(run_validate(&args, &quiet_cli()), EXIT_SUCCESS);
}

#[test]
fn issues_fail_validation() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("chart.json");
    std::fs::write(&input, r#"{"matrix": [[0, -1], [1]], "width": 600, "height": 600}"#).unwrap();
    let args = ValidateArgs { input };
    assert!(!run_validate_impl(&args, &quiet_cli()).unwrap());
    assert_eq!(run_validate(&args, &quiet_cli()), EXIT_CONFIG_ERROR);
}

#[test]
fn unparseable_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("chart.toml");
    std::fs::write(&input, "matrix = [").unwrap();
    let args = ValidateArgs { input };
    let err = run_validate_impl(&args, &quiet_cli()).unwrap_err();
    assert_eq!(err.error_type(), "TomlParse");
}

#[test]
fn relationship_count_skips_hidden_diagonal() {
    let config = crate::ChartConfig::new(
        vec![vec![2.0, 1.0], vec![1.0, 3.0]],
        vec!["A".to_string(), "B".to_string()],
        600.0,
        600.0,
    );
    assert_eq!(drawn_relationships(&config), 4);

    let hidden = config.with_layout(crate::LayoutConfig {
        self_relationships: SelfRelationships::Hide,
        ..crate::LayoutConfig::default()
    });
    assert_eq!(drawn_relationships(&hidden), 2);
}
