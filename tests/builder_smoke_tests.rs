use chart_builder_rs::component::{AxisPosition, LegendPosition};
use chart_builder_rs::schema::ComponentKind;
use chart_builder_rs::{Configurable, create, create_with_report};
use serde_json::json;

#[test]
fn full_cartesian_configuration_builds_every_component() {
    let options = json!({
        "type": "cartesian",
        "document": "main-window",
        "data": [{ "month": "Jan", "sales": 155 }, { "month": "Feb", "sales": 212 }],
        "theme": "dark",
        "axes": [
            { "type": "category", "position": "bottom", "rotation": 30 },
            { "type": "number" },
        ],
        "series": [
            { "type": "line", "x_key": "month", "y_key": "sales" },
            { "type": "column", "y_key": "volume", "grouped": true },
        ],
        "legend": { "position": "right", "marker_size": 20 },
        "title": { "text": "Sales 2025" },
        "subtitle": { "text": "by month", "font_size": 12 },
        "padding": { "top": 10, "left": 10 },
    });

    let (instance, report) = create_with_report(&options);
    assert!(report.is_clean(), "dropped: {:?}", report.dropped());

    let chart = instance.expect("chart built").as_chart().cloned().expect("chart instance");
    assert_eq!(chart.kind(), ComponentKind::Cartesian);
    assert_eq!(chart.document, Some(json!("main-window")));
    assert_eq!(
        chart.data,
        Some(json!([{ "month": "Jan", "sales": 155 }, { "month": "Feb", "sales": 212 }]))
    );
    assert_eq!(chart.extras.get("theme"), Some(&json!("dark")));
    assert!(!chart.extras.contains_key("document"));

    assert_eq!(chart.axes.len(), 2);
    assert_eq!(chart.axes[0].kind(), ComponentKind::Category);
    assert_eq!(chart.axes[0].position, AxisPosition::Bottom);
    assert_eq!(chart.axes[0].rotation, Some(30.0));
    assert_eq!(chart.axes[1].kind(), ComponentKind::Number);
    assert_eq!(chart.axes[1].position, AxisPosition::Left, "descriptor default");

    assert_eq!(chart.series.len(), 2);
    let line = &chart.series[0];
    assert_eq!(line.kind(), ComponentKind::Line);
    assert_eq!(line.x_key, "month");
    assert_eq!(line.y_key, "sales");
    assert!(line.visible && line.show_in_legend);
    let column = &chart.series[1];
    assert_eq!(column.kind(), ComponentKind::Column);
    assert_eq!(column.y_key, "volume");
    assert_eq!(column.x_key, "", "descriptor default");
    assert_eq!(column.extras.get("grouped"), Some(&json!(true)));

    assert_eq!(chart.legend.position, LegendPosition::Right);
    assert_eq!(chart.legend.marker_size, 20.0);
    assert!(chart.legend.enabled, "unset legend option takes its default");

    let title = chart.title.expect("title caption");
    assert_eq!(title.text, "Sales 2025");
    assert_eq!(title.font_size, 18.0);
    assert_eq!(title.font_weight.as_deref(), Some("bold"));
    let subtitle = chart.subtitle.expect("subtitle caption");
    assert_eq!(subtitle.text, "by month");
    assert_eq!(subtitle.font_size, 12.0);
    assert_eq!(subtitle.font_weight, None);

    assert_eq!(chart.padding.top, 10.0);
    assert_eq!(chart.padding.left, 10.0);
    assert_eq!(chart.padding.right, 20.0);
    assert_eq!(chart.padding.bottom, 20.0);
}

#[test]
fn empty_configuration_builds_a_default_cartesian_chart() {
    let chart = create(&json!({})).expect("chart built");
    let chart = chart.as_chart().expect("chart instance");

    assert_eq!(chart.kind(), ComponentKind::Cartesian);
    assert_eq!(chart.document, None);
    assert_eq!(chart.data, Some(json!([])), "data defaults to an empty table");
    assert!(chart.series.is_empty());
    assert_eq!(chart.axes.len(), 2, "two default axes");
    assert!(chart.title.is_none());
    assert!(chart.subtitle.is_none());
    assert_eq!(chart.padding.top, 20.0);
    assert!(chart.legend.enabled);
    assert_eq!(chart.legend.position, LegendPosition::Bottom);
}

#[test]
fn polar_pie_configuration_builds_a_polar_chart() {
    let options = json!({
        "type": "polar",
        "series": [{ "type": "pie", "angle_key": "share", "label_key": "name" }],
    });

    let chart = create(&options).expect("chart built");
    let chart = chart.as_chart().expect("chart instance");
    assert_eq!(chart.kind(), ComponentKind::Polar);
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].kind(), ComponentKind::Pie);
    assert_eq!(chart.series[0].angle_key, "share");
    assert_eq!(chart.series[0].label_key, "name");
    assert!(chart.axes.is_empty(), "polar charts declare no axes");
}

#[test]
fn non_object_roots_build_nothing() {
    assert!(create(&json!(null)).is_none());
    assert!(create(&json!(42)).is_none());
    assert!(create(&json!("cartesian")).is_none());
    assert!(create(&json!([{ "type": "cartesian" }])).is_none());
}

#[test]
fn unknown_root_type_builds_nothing() {
    let (instance, report) = create_with_report(&json!({ "type": "sparkboard" }));
    assert!(instance.is_none());
    assert_eq!(report.dropped().len(), 1);
    assert_eq!(report.dropped()[0].type_name.as_deref(), Some("sparkboard"));
}
