use super::*;

fn valid() -> ChartConfig {
    ChartConfig::new(
        vec![vec![0.0, 5.0], vec![3.0, 0.0]],
        vec!["A".to_string(), "B".to_string()],
        600.0,
        600.0,
    )
}

#[test]
fn valid_config_passes() {
    assert!(validate_chart_config(&valid()).is_ok());
    assert!(collect_config_issues(&valid()).is_empty());
}

#[test]
fn empty_config_names_every_missing_field() {
    let issues = collect_config_issues(&ChartConfig::default());
    assert!(issues.contains(&ConfigIssue::Missing("matrix")));
    assert!(issues.contains(&ConfigIssue::Missing("name_by_index")));
    assert!(issues.contains(&ConfigIssue::Missing("index_by_name")));
    assert!(issues.contains(&ConfigIssue::NonPositive {
        field: "width",
        value: 0.0
    }));
    assert!(issues.contains(&ConfigIssue::NonPositive {
        field: "height",
        value: 0.0
    }));
}

#[test]
fn validate_returns_invalid_config_error() {
    let err = validate_chart_config(&ChartConfig::default()).unwrap_err();
    assert_eq!(err.error_type(), "InvalidConfig");
    assert!(err.to_string().contains("matrix is missing"));
}

mod matrix_tests {
    use super::*;

    #[test]
    fn non_square_row_is_reported() {
        let mut config = valid();
        config.matrix[1] = vec![3.0];
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::NonSquareRow {
                row: 1,
                expected: 2,
                actual: 1
            }]
        );
    }

    #[test]
    fn negative_weight_is_reported() {
        let mut config = valid();
        config.matrix[0][1] = -1.0;
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::InvalidWeight {
                row: 0,
                col: 1,
                value: -1.0
            }]
        );
    }

    #[test]
    fn non_finite_weight_is_reported() {
        let mut config = valid();
        config.matrix[1][0] = f64::INFINITY;
        let issues = collect_config_issues(&config);
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0],
            ConfigIssue::InvalidWeight { row: 1, col: 0, .. }
        ));
    }

    #[test]
    fn zero_weights_are_fine() {
        let mut config = valid();
        config.matrix = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        assert!(validate_chart_config(&config).is_ok());
    }
}

mod name_tests {
    use super::*;

    #[test]
    fn name_count_mismatch_is_reported() {
        let mut config = valid();
        config.name_by_index.push("C".to_string());
        config.index_by_name.insert("C".to_string(), 2);
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::NameCountMismatch { names: 3, size: 2 }]
        );
    }

    #[test]
    fn wrong_index_is_reported() {
        let mut config = valid();
        config.index_by_name.insert("B".to_string(), 0);
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::IndexByNameMismatch {
                name: "B".to_string(),
                expected: Some(1),
                actual: Some(0),
            }]
        );
    }

    #[test]
    fn unknown_name_in_index_is_reported() {
        let mut config = valid();
        config.index_by_name.insert("ghost".to_string(), 1);
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::IndexByNameMismatch {
                name: "ghost".to_string(),
                expected: None,
                actual: Some(1),
            }]
        );
    }

    #[test]
    fn name_missing_from_index_is_reported() {
        let mut config = valid();
        config.index_by_name.shift_remove("A");
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::IndexByNameMismatch {
                name: "A".to_string(),
                expected: Some(0),
                actual: None,
            }]
        );
    }
}

mod dimension_tests {
    use super::*;

    #[test]
    fn surface_too_small_for_label_margin() {
        let mut config = valid();
        config.width = 200.0;
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::SurfaceTooSmall {
                outer_radius: 100.0,
                margin: 124.0
            }]
        );
    }

    #[test]
    fn zero_font_size_is_reported() {
        let config = valid().with_font_size(0.0);
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::NonPositive {
                field: "font_size",
                value: 0.0
            }]
        );
    }

    #[test]
    fn non_positive_size_skips_radius_check() {
        let mut config = valid();
        config.height = -5.0;
        let issues = collect_config_issues(&config);
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0],
            ConfigIssue::NonPositive { field: "height", .. }
        ));
    }
}

mod export_tests {
    use super::*;

    #[test]
    fn zero_export_size_is_reported() {
        let config = valid().with_export(crate::config::ExportConfig::default().with_size(0, 10));
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::NonPositive {
                field: "export.width",
                value: 0.0
            }]
        );
    }

    #[test]
    fn bad_background_is_reported() {
        let mut config = valid();
        config.export.background = "white".to_string();
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::InvalidColor {
                field: "export.background",
                value: "white".to_string()
            }]
        );
    }

    #[test]
    fn blank_export_name_is_reported() {
        let config = valid().with_export(crate::config::ExportConfig::default().with_name("  "));
        assert_eq!(
            collect_config_issues(&config),
            vec![ConfigIssue::Missing("export.name")]
        );
    }

    #[test]
    fn export_name_with_path_separator_is_reported() {
        for name in ["../deps", "out/deps", "out\\deps"] {
            let config = valid().with_export(crate::config::ExportConfig::default().with_name(name));
            assert_eq!(
                collect_config_issues(&config),
                vec![ConfigIssue::InvalidFileName {
                    field: "export.name",
                    value: name.to_string()
                }]
            );
        }
    }

    #[test]
    fn plain_export_name_passes() {
        assert_eq!(export_name_issue("deps.v2"), None);
        assert_eq!(export_name_issue(""), Some(ConfigIssue::Missing("export.name")));
    }
}
