use activity_chart::api::{
    ChartEngine, ChartEngineConfig, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot,
};
use activity_chart::core::{ChartDimensions, LayoutOptions, ScaleMode, Series};
use activity_chart::render::NullRenderer;

fn loaded_engine() -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    let series = Series::from_json_str(
        r#"[{"date":"2024-01-01","total":4},{"date":"2024-01-08","total":8}]"#,
    )
    .expect("series");
    engine.set_series(series).expect("set series");
    engine.select_point(1).expect("select");
    engine
}

#[test]
fn snapshot_captures_layout_and_tooltip() {
    let snapshot = loaded_engine().snapshot();
    assert_eq!(snapshot.revision, 1);
    assert_eq!(snapshot.layout.as_ref().expect("layout").len(), 2);
    assert_eq!(snapshot.tooltip.as_ref().expect("tooltip").index, 1);
}

#[test]
fn snapshot_contract_round_trips() {
    let snapshot = loaded_engine().snapshot();
    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {ENGINE_SNAPSHOT_JSON_SCHEMA_V1}")));

    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let bare = snapshot.to_json_pretty().expect("serialize bare");
    let parsed = EngineSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unsupported_contract_version_is_rejected() {
    let snapshot = loaded_engine().snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");
    assert!(EngineSnapshot::from_json_compat_str(&json).is_err());
}

#[test]
fn config_loads_from_partial_json() {
    let config = ChartEngineConfig::from_json_str(
        r#"{
            "dimensions": {"width": 800, "height": 400},
            "layout_options": {"scale_mode": "split_midline", "plot_deletions": true}
        }"#,
    )
    .expect("config");

    assert_eq!(config.dimensions.width, 800.0);
    assert_eq!(config.dimensions.padding_x, 50.0);
    assert_eq!(config.dimensions.gridline_count, 16);
    assert_eq!(config.tooltip_size.height, 110.0);
    assert_eq!(
        config.layout_options.map(|options| options.scale_mode),
        Some(ScaleMode::SplitMidline)
    );

    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(ChartEngineConfig::from_json_str(&json).expect("reload"), config);
}

#[test]
fn config_json_with_invalid_dimensions_is_rejected() {
    assert!(ChartEngineConfig::from_json_str(r#"{"dimensions": {"width": 0}}"#).is_err());
    assert!(ChartEngineConfig::from_json_str("not json").is_err());
}

#[test]
fn explicit_variant_overrides_series_shape() {
    let config = ChartEngineConfig::new(ChartDimensions::default())
        .with_layout_options(LayoutOptions::additions_only());
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    let series = Series::from_columns(&["2024-01-01"], &[3.0], &[-2.0]).expect("series");
    engine.set_series(series).expect("set series");
    assert_eq!(engine.layout().expect("layout").paths.len(), 1);
}
