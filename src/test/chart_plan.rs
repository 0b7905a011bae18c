use crate::error::ReportError;
use crate::render::{ChartPlan, ChartSpec, Placement, SeriesStyle, YScale};

fn chart(scale: YScale, series: Vec<(&str, Vec<(f64, f64)>)>) -> ChartSpec {
    let mut c = ChartSpec::new("t", "Trial", "y").y_scale(scale);
    for (i, (label, points)) in series.into_iter().enumerate() {
        c.push_series(label, SeriesStyle::nth(i), points);
    }
    c
}

#[test]
fn log_scale_rejects_zero_and_negative_values() {
    let c = chart(
        YScale::Log,
        vec![("AODV", vec![(1.0, 10.0)]), ("DSDV", vec![(1.0, 5.0), (2.0, 0.0)])],
    );
    match ChartPlan::build(&c).unwrap_err() {
        ReportError::NonPositiveLogValue { series, x, y } => {
            assert_eq!(series, "DSDV");
            assert_eq!(x, 2.0);
            assert_eq!(y, 0.0);
        }
        other => panic!("expected NonPositiveLogValue, got {other:?}"),
    }

    let negative = chart(YScale::Log, vec![("AODV", vec![(1.0, -1.0)])]);
    assert!(ChartPlan::build(&negative).is_err());
}

#[test]
fn linear_scale_accepts_zero_and_negative_values() {
    let c = chart(YScale::Linear, vec![("AODV", vec![(1.0, -2.0), (2.0, 0.0), (3.0, 4.0)])]);
    let plan = ChartPlan::build(&c).expect("plan");
    assert!(plan.y_range.0 < -2.0);
    assert!(plan.y_range.1 > 4.0);
    assert!(plan.minor_y.is_empty());
    assert!(!plan.major_y.is_empty());
    assert!(
        plan.major_y
            .iter()
            .all(|y| *y >= plan.y_range.0 && *y <= plan.y_range.1)
    );
}

#[test]
fn log_scale_spans_whole_decades_with_minor_lines() {
    let c = chart(YScale::Log, vec![("AODV", vec![(1.0, 480.0), (2.0, 500.0)])]);
    let plan = ChartPlan::build(&c).expect("plan");
    assert_eq!(plan.y_range, (100.0, 1000.0));
    assert_eq!(plan.major_y, vec![100.0, 1000.0]);
    assert_eq!(
        plan.minor_y,
        vec![200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0]
    );
}

#[test]
fn percent_values_plot_at_their_percentage() {
    let c = chart(YScale::Linear, vec![("PDR", vec![(1.0, 87.5)])]);
    let plan = ChartPlan::build(&c).expect("plan");
    assert!(plan.y_range.0 < 87.5 && plan.y_range.1 > 87.5);
    assert!(plan.y_range.0 > 1.0, "87.5 must not be drawn as 0.875");
}

#[test]
fn x_ticks_are_distinct_and_sorted_but_points_keep_their_order() {
    let points = vec![(3.0, 1.0), (1.0, 2.0), (2.0, 3.0)];
    let c = chart(
        YScale::Linear,
        vec![("AODV", points.clone()), ("DSDV", vec![(1.0, 1.0), (3.0, 1.0)])],
    );
    let plan = ChartPlan::build(&c).expect("plan");
    assert_eq!(plan.x_ticks, vec![1.0, 2.0, 3.0]);
    assert_eq!(c.series[0].points, points);
    assert!(plan.x_range.0 < 1.0 && plan.x_range.1 > 3.0);
}

#[test]
fn annotations_go_above_the_first_series_and_below_the_others() {
    let c = chart(
        YScale::Log,
        vec![("AODV", vec![(1.0, 512.346)]), ("DSDV", vec![(1.0, 256.0)])],
    )
    .annotate(true);
    let plan = ChartPlan::build(&c).expect("plan");
    assert_eq!(plan.annotations.len(), 2);
    assert_eq!(plan.annotations[0].text, "512.35");
    assert_eq!(plan.annotations[0].placement, Placement::Above);
    assert!(plan.annotations[0].placement.offset_px() < 0);
    assert_eq!(plan.annotations[1].text, "256.00");
    assert_eq!(plan.annotations[1].placement, Placement::Below);
    assert!(plan.annotations[1].placement.offset_px() > 0);
}

#[test]
fn no_annotations_unless_requested() {
    let c = chart(YScale::Log, vec![("AODV", vec![(1.0, 5.0)])]);
    assert!(ChartPlan::build(&c).expect("plan").annotations.is_empty());
}

#[test]
fn flat_and_empty_charts_still_get_a_range() {
    let flat = chart(YScale::Linear, vec![("AODV", vec![(1.0, 5.0), (2.0, 5.0)])]);
    let plan = ChartPlan::build(&flat).expect("plan");
    assert!(plan.y_range.0 < 5.0 && plan.y_range.1 > 5.0);

    let empty = chart(YScale::Log, vec![]);
    let plan = ChartPlan::build(&empty).expect("plan");
    assert!(plan.y_range.0 > 0.0 && plan.y_range.1 > plan.y_range.0);
    assert!(plan.x_ticks.is_empty());
}
