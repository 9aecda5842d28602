use chart_builder_rs::schema::ComponentKind;
use chart_builder_rs::{Configurable, create, create_with_report, update, update_with_report};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1_000.0f64..1_000.0).prop_map(Value::from),
        "[a-z_]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..6).prop_map(|entries| {
                Value::Object(entries.into_iter().collect())
            }),
        ]
    })
}

fn series_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("line".to_owned()),
        Just("column".to_owned()),
        Just("bar".to_owned()),
        Just("area".to_owned()),
        Just("scatter".to_owned()),
        Just("pie".to_owned()),
        "zz[a-z]{1,6}",
    ]
}

proptest! {
    #[test]
    fn create_is_deterministic_and_total(options in arb_json()) {
        let (first, first_report) = create_with_report(&options);
        let (second, second_report) = create_with_report(&options);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first_report, second_report);

        if let Some(mut chart) = first {
            // Updates must be equally total: no input may panic.
            let _ = update_with_report(&mut chart, &options);
        }
    }

    #[test]
    fn create_and_update_never_mutate_the_options(options in arb_json()) {
        let snapshot = options.clone();
        let built = create(&options);
        prop_assert_eq!(&options, &snapshot);

        if let Some(mut chart) = built {
            update(&mut chart, &options);
            prop_assert_eq!(&options, &snapshot);
        }
    }

    #[test]
    fn every_object_root_resolves_to_some_chart(mut entries in prop::collection::btree_map("[a-z_]{1,8}", arb_json(), 0..5)) {
        // Typeless object roots always infer a chart kind, so only an
        // explicit unresolvable type may yield nothing.
        entries.remove("type");
        let options = Value::Object(entries.into_iter().collect());
        let chart = create(&options);
        prop_assert!(chart.is_some());
    }

    #[test]
    fn dropped_series_are_exactly_the_foreign_kinds(types in prop::collection::vec(series_type(), 0..8)) {
        let elements: Vec<Value> = types.iter().map(|name| json!({ "type": name })).collect();
        let options = json!({ "type": "cartesian", "series": elements });

        let (instance, report) = create_with_report(&options);
        let instance = instance.expect("chart built");
        let chart = instance.as_chart().expect("chart instance");

        let survivors: Vec<&str> = types
            .iter()
            .map(String::as_str)
            .filter(|name| ["line", "column", "bar", "area", "scatter"].contains(name))
            .collect();
        prop_assert_eq!(chart.series.len(), survivors.len());
        for (series, expected) in chart.series.iter().zip(&survivors) {
            prop_assert_eq!(series.kind().as_str(), *expected);
        }
        prop_assert_eq!(report.dropped().len(), types.len() - survivors.len());
    }

    #[test]
    fn inferred_chart_kind_owns_the_first_series_kind(name in series_type()) {
        let options = json!({ "series": [{ "type": &name }] });
        let chart = create(&options).expect("object roots always build");
        let expected = match name.as_str() {
            "pie" => ComponentKind::Polar,
            _ => ComponentKind::Cartesian,
        };
        prop_assert_eq!(chart.kind(), expected);
    }

    #[test]
    fn legend_updates_land_on_the_value_or_the_default(size in 1.0f64..64.0) {
        let mut chart = create(&json!({ "type": "cartesian" })).expect("chart built");

        update(&mut chart, &json!({ "legend": { "marker_size": size } }));
        prop_assert_eq!(chart.as_chart().expect("chart instance").legend.marker_size, size);

        update(&mut chart, &json!({ "legend": {} }));
        prop_assert_eq!(chart.as_chart().expect("chart instance").legend.marker_size, 14.0);
    }
}
