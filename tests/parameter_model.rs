use paramex::prelude::*;

fn make_layout() -> ParamLayout {
    ParamLayout::new(vec![
        FloatParam::new("Gain Wet", 0.0, FloatRange::linear(-12.0, 12.0), Unit::Decibel),
        FloatParam::new(
            "Frequency",
            1000.0,
            FloatRange::with_centre(20.0, 20_000.0, 1000.0),
            Unit::Hertz,
        ),
    ])
    .expect("The IDs are unique")
}

#[test]
fn round_trip_over_the_whole_range() {
    let layout = make_layout();
    for param in &layout {
        let range = param.range();
        let tolerance = (range.max() - range.min()) * 1e-4;

        for i in 0..=1000 {
            let plain = range.min() + (range.max() - range.min()) * (i as f32 / 1000.0);
            let round_trip = param.preview_plain(param.preview_normalized(plain));
            approx::assert_abs_diff_eq!(round_trip, plain, epsilon = tolerance);
        }
    }
}

#[test]
fn normalized_values_stay_in_bounds() {
    let layout = make_layout();
    for param in &layout {
        for plain in [-1e6, -12.0, 0.0, 20.0, 1000.0, 20_000.0, 1e6] {
            let normalized = param.preview_normalized(plain);
            assert!((0.0..=1.0).contains(&normalized), "{param:?}: {normalized}");
        }

        assert_eq!(param.preview_plain(-0.5), param.range().min());
        approx::assert_relative_eq!(
            param.preview_plain(1.5),
            param.range().max(),
            max_relative = 1e-5
        );
    }
}

#[test]
fn frequency_is_centred() {
    let layout = make_layout();
    let frequency = layout.param("frequency").expect("Frequency exists");
    approx::assert_relative_eq!(frequency.preview_plain(0.5), 1000.0, max_relative = 1e-4);
    approx::assert_relative_eq!(frequency.default_normalized_value(), 0.5, epsilon = 1e-4);
}

#[test]
fn text_round_trip() {
    let layout = make_layout();
    let gain = layout.param("gainwet").expect("Gain exists");
    let frequency = layout.param("frequency").expect("Frequency exists");

    assert_eq!(gain.normalized_value_to_string(gain.preview_normalized(3.0)), "3.00 dB");
    assert_eq!(
        gain.preview_plain(gain.string_to_normalized_value("3.00 dB")),
        3.0
    );

    assert_eq!(
        frequency.normalized_value_to_string(frequency.preview_normalized(50.0)),
        "50.00 hz"
    );
    assert_eq!(
        frequency.normalized_value_to_string(frequency.preview_normalized(500.0)),
        "500.0 hz"
    );
    assert_eq!(
        frequency.normalized_value_to_string(frequency.preview_normalized(2000.0)),
        "2.0 khz"
    );
    approx::assert_relative_eq!(
        frequency.preview_plain(frequency.string_to_normalized_value("2.0 khz")),
        2000.0,
        max_relative = 1e-4
    );
}

#[test]
fn ids_are_derived_from_names() {
    let layout = make_layout();
    let ids: Vec<_> = layout.iter().map(|param| param.id().to_owned()).collect();
    assert_eq!(ids, [param_id_from_name("Gain Wet"), param_id_from_name("Frequency")]);
    assert_eq!(ids, ["gainwet", "frequency"]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let result = ParamLayout::new(vec![
        FloatParam::new("Frequency", 1000.0, FloatRange::linear(20.0, 20_000.0), Unit::Hertz),
        FloatParam::new("FREQUENCY", 1000.0, FloatRange::linear(20.0, 20_000.0), Unit::Hertz),
    ]);
    assert!(result.is_err());
}

#[test]
fn listing_serializes_to_json() {
    let layout = make_layout();
    let json = serde_json::to_value(layout.param_info()).expect("Serializable");

    assert_eq!(json[0]["id"], "gainwet");
    assert_eq!(json[0]["display"], "0.00 dB");
    assert_eq!(json[1]["range"]["kind"], "biased");
    assert_eq!(json[1]["unit"], "hz");
}
