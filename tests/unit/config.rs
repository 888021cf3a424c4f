use teamscout::ScoutError;
use teamscout::config::{Config, EmbeddingBackend};
use teamscout::test_utils::fixtures::UnitTestFixture;

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = Config::from_toml(
        r#"
[scoring.weights]
semantic = 0.6

[embedding]
backend = "local"
dimensions = 256
"#,
    )
    .unwrap();

    assert!((config.scoring.weights.semantic - 0.6).abs() < f64::EPSILON);
    assert!((config.scoring.weights.keyword - 0.20).abs() < f64::EPSILON);
    assert!((config.scoring.thresholds.min_semantic - 0.3).abs() < f64::EPSILON);
    assert_eq!(config.embedding.backend, EmbeddingBackend::Local);
    assert_eq!(config.embedding.dimensions, 256);
    assert_eq!(config.embedding.batch_size, 100);
    assert_eq!(config.profile.field_repetition, 3);
    assert_eq!(config.team.max_size, 12);
}

#[test]
fn out_of_range_values_are_rejected() {
    for raw in [
        "[scoring.thresholds]\nmin_keyword = 1.5\n",
        "[scoring.weights]\ndomain = -0.1\n",
        "[embedding]\nbatch_size = 500\n",
        "[embedding]\ndimensions = 0\n",
        "[team]\nmax_size = 0\n",
    ] {
        let err = Config::from_toml(raw).unwrap_err();
        assert!(matches!(err, ScoutError::Config(_)), "accepted {raw:?}");
    }
}

#[test]
fn toml_scoring_keys_stay_snake_case() {
    let config = Config::from_toml(
        "[scoring.weights]\nbudget_penalty = 0.15\n\n[scoring.thresholds]\nmin_keyword = 0.25\n",
    )
    .unwrap();
    assert!((config.scoring.weights.budget_penalty - 0.15).abs() < f64::EPSILON);
    assert!((config.scoring.thresholds.min_keyword - 0.25).abs() < f64::EPSILON);

    let err = Config::from_toml("[scoring.thresholds]\nmin_keywrod = 0.25\n").unwrap_err();
    assert!(matches!(err, ScoutError::Config(_)));
}

#[test]
fn unparseable_toml_is_a_config_error() {
    let err = Config::from_toml("[scoring\n").unwrap_err();
    assert!(matches!(err, ScoutError::Config(_)));
}

// The only test in this binary that calls `Config::load`, since it touches
// the process environment.
#[test]
#[allow(unsafe_code)]
fn load_layers_files_then_env() {
    let fixture = UnitTestFixture::new();
    let _ = fixture.create_file("teamscout.toml", "[profile]\nfield_repetition = 5\n");
    let path = fixture.create_file(
        "custom.toml",
        "[team]\ndefault_size = 4\nmax_size = 8\n\n[profile]\nfield_repetition = 2\n",
    );

    let project = Config::load(None, &fixture.data_path).unwrap();
    assert_eq!(project.profile.field_repetition, 5);

    // An explicit file replaces the global and project files.
    let config = Config::load(Some(&path), &fixture.data_path).unwrap();
    assert_eq!(config.team.default_size, 4);
    assert_eq!(config.team.max_size, 8);
    assert_eq!(config.profile.field_repetition, 2);

    let missing = fixture.data_path.join("absent.toml");
    let absent = Config::load(Some(&missing), &fixture.data_path);
    assert!(matches!(absent, Err(ScoutError::MissingConfig(_))));

    // SAFETY: no other test in this binary reads these variables.
    unsafe { std::env::set_var("TEAMSCOUT_TEAM_MAX_SIZE", "6") };
    let overridden = Config::load(Some(&path), &fixture.data_path);
    unsafe { std::env::remove_var("TEAMSCOUT_TEAM_MAX_SIZE") };
    assert_eq!(overridden.unwrap().team.max_size, 6);

    unsafe { std::env::set_var("TEAMSCOUT_SCORING_MIN_SEMANTIC", "lots") };
    let invalid = Config::load(Some(&path), &fixture.data_path);
    unsafe { std::env::remove_var("TEAMSCOUT_SCORING_MIN_SEMANTIC") };
    assert!(matches!(invalid, Err(ScoutError::Config(_))));
}
