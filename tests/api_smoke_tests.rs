use activity_chart::api::{ChartEngine, ChartEngineConfig};
use activity_chart::core::Series;
use activity_chart::render::NullRenderer;
use activity_chart::telemetry::init_default_tracing;

#[test]
fn tracing_init_without_feature_is_a_no_op() {
    #[cfg(not(feature = "telemetry"))]
    assert!(!init_default_tracing());
    #[cfg(feature = "telemetry")]
    let _ = init_default_tracing();
}

#[test]
fn weekly_commit_activity_renders_end_to_end() {
    let rows = [
        [1_704_585_600, 1_200, -300],
        [1_705_190_400, 800, -950],
        [1_705_795_200, 400, -100],
    ];
    let series = Series::from_code_frequency_rows(&rows, Some(2024)).expect("series");

    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine.set_series(series).expect("set series");
    let x = engine.layout().expect("layout").points[0].x;
    assert_eq!(engine.click(x, 0.0), Some(0));
    engine.render().expect("render");

    let content = engine.tooltip_content().expect("tooltip");
    assert_eq!(content.lines, vec!["additions: 1200", "deletions: 300"]);
    assert_eq!(engine.renderer().frames_rendered, 1);
}
