use dash_plot::core::{
    LayoutFrame, PlotRect, Position, Sample, ScalingPolicy, SeriesSnapshot, SeriesState, Size,
    compute,
};
use proptest::prelude::*;

fn snapshot_of(samples: Vec<Sample<f64>>) -> SeriesSnapshot<f64> {
    let state = SeriesState::new();
    state.replace(samples);
    state.consume_if_dirty().expect("snapshot")
}

fn samples_strategy(
    x_range: std::ops::Range<f64>,
) -> impl Strategy<Value = Vec<Sample<f64>>> {
    proptest::collection::vec((x_range, -1_000.0f64..1_000.0), 1..128)
        .prop_map(|pairs| pairs.into_iter().map(Sample::from).collect())
}

fn rect_strategy() -> impl Strategy<Value = PlotRect> {
    (
        -500.0f64..500.0,
        -500.0f64..1_500.0,
        1.0f64..2_000.0,
        1.0f64..2_000.0,
    )
        .prop_map(|(x, y, width, height)| {
            PlotRect::new(Position::new(x, y), Size::new(width, height))
        })
}

proptest! {
    #[test]
    fn fit_to_origin_keeps_length_and_horizontal_extent(
        samples in samples_strategy(0.0..10_000.0),
        rect in rect_strategy()
    ) {
        let snapshot = snapshot_of(samples.clone());
        let buffer = compute(&snapshot, rect, ScalingPolicy::FitToOrigin);

        prop_assert_eq!(buffer.len(), samples.len());
        let tolerance = 1e-9 * rect.size.width.max(1.0);
        for point in buffer.points() {
            prop_assert!(point.x >= rect.anchor.x - tolerance);
            prop_assert!(point.x <= rect.anchor.x + rect.size.width + tolerance);
        }
    }

    #[test]
    fn fit_to_minimum_pins_extremes_to_edges(
        samples in samples_strategy(-10_000.0..10_000.0),
        rect in rect_strategy()
    ) {
        let snapshot = snapshot_of(samples.clone());
        let buffer = compute(&snapshot, rect, ScalingPolicy::FitToMinimum);
        prop_assert_eq!(buffer.len(), samples.len());

        let (min_index, min_sample) = samples
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.x.total_cmp(&b.1.x))
            .expect("non-empty");
        let (max_index, max_sample) = samples
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.x.total_cmp(&b.1.x))
            .expect("non-empty");

        let tolerance = 1e-6 * rect.size.width.max(1.0);
        prop_assert!((buffer.points()[min_index].x - rect.anchor.x).abs() <= tolerance);
        if max_sample.x > min_sample.x {
            let right = rect.anchor.x + rect.size.width;
            prop_assert!((buffer.points()[max_index].x - right).abs() <= tolerance);
        }
    }

    #[test]
    fn compute_is_idempotent(
        samples in samples_strategy(-10_000.0..10_000.0),
        rect in rect_strategy(),
        fit_to_minimum in any::<bool>()
    ) {
        let policy = if fit_to_minimum {
            ScalingPolicy::FitToMinimum
        } else {
            ScalingPolicy::FitToOrigin
        };
        let snapshot = snapshot_of(samples);
        let first = compute(&snapshot, rect, policy);
        let second = compute(&snapshot, rect, policy);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn resize_round_trip_matches_direct_flip(
        first_parent in (1.0f64..4_000.0, 1.0f64..4_000.0),
        second_parent in (1.0f64..4_000.0, 1.0f64..4_000.0),
        position in (-1_000.0f64..1_000.0, -1_000.0f64..1_000.0)
    ) {
        let mut layout = LayoutFrame::default();
        layout.set_parent_dimensions(Size::new(first_parent.0, first_parent.1));
        layout.set_position(Position::new(position.0, position.1));
        layout.set_parent_dimensions(Size::new(second_parent.0, second_parent.1));

        prop_assert_eq!(
            layout.absolute_position(),
            Position::new(position.0, second_parent.1 - position.1)
        );
    }
}
