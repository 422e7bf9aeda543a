use autochart::advisor::ChartType;
use autochart::filter::{FilteredRows, NO_VALUE_LABEL};
use autochart::series::{
    build_datasets, build_pie_slices, build_scatter_points, build_series, palette_color,
    ScatterPoint, PALETTE,
};
use autochart::{Cell, TabularResult};

fn table(columns: &[&str], rows: Vec<Vec<Cell>>) -> TabularResult {
    TabularResult::new(columns.iter().map(|c| c.to_string()).collect(), rows)
}

fn sales() -> TabularResult {
    table(
        &["region", "q1", "q2"],
        vec![
            vec!["north".into(), 10.0.into(), "2,5".into()],
            vec![Cell::Null, "n/a".into(), 4.0.into()],
            vec!["south".into(), 7.0.into(), Cell::Null],
        ],
    )
}

#[test]
fn labels_use_a_placeholder_for_null_x() {
    let result = sales();
    let data = build_series(&FilteredRows::unfiltered(&result, 0, vec![1]));
    assert_eq!(data.labels, vec!["north", NO_VALUE_LABEL, "south"]);
}

#[test]
fn values_are_aligned_with_labels_and_null_when_not_numeric() {
    let result = sales();
    let data = build_series(&FilteredRows::unfiltered(&result, 0, vec![1, 2]));

    assert_eq!(data.series.len(), 2);
    assert_eq!(data.series[0].name, "q1");
    assert_eq!(data.series[0].values, vec![Some(10.0), None, Some(7.0)]);
    assert_eq!(data.series[1].values, vec![Some(2.5), Some(4.0), None]);
    for series in &data.series {
        assert_eq!(series.values.len(), data.labels.len());
    }
    assert_eq!(data.numeric_count(), 4);
    assert!(data.is_chartable());
}

#[test]
fn one_numeric_value_is_not_chartable() {
    let result = table(
        &["k", "v"],
        vec![vec!["a".into(), 1.0.into()], vec!["b".into(), "x".into()]],
    );
    let data = build_series(&FilteredRows::unfiltered(&result, 0, vec![1]));
    assert_eq!(data.numeric_count(), 1);
    assert!(!data.is_chartable());
}

#[test]
fn scatter_points_pair_x_with_the_first_series() {
    let result = table(
        &["price", "quantity", "other"],
        vec![
            vec![1.0.into(), 2.0.into(), 9.0.into()],
            vec!["3,5".into(), Cell::Null, 9.0.into()],
        ],
    );
    let points = build_scatter_points(&FilteredRows::unfiltered(&result, 0, vec![1, 2]));
    assert_eq!(
        points,
        vec![
            ScatterPoint {
                x: Some(1.0),
                y: Some(2.0)
            },
            ScatterPoint {
                x: Some(3.5),
                y: None
            },
        ]
    );
    assert_eq!(points[0].coordinates(), Some([1.0, 2.0]));
    assert_eq!(points[1].coordinates(), None);
}

#[test]
fn pie_slices_skip_missing_values_and_cycle_colors() {
    let result = sales();
    let data = build_series(&FilteredRows::unfiltered(&result, 0, vec![1]));
    let slices = build_pie_slices(&data);

    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].label, "north");
    assert_eq!(slices[1].label, "south");
    assert_eq!(slices[1].value, 7.0);
    assert_eq!(slices[0].color, PALETTE[0].0);
    assert_eq!(slices[1].color, PALETTE[1].0);
}

#[test]
fn datasets_fill_only_for_area() {
    let result = sales();
    let data = build_series(&FilteredRows::unfiltered(&result, 0, vec![1, 2]));

    let area = build_datasets(&data, ChartType::Area);
    assert!(area.iter().all(|d| d.fill));
    assert_eq!(area[1].background_color, PALETTE[1].0);
    assert_eq!(area[1].border_color, PALETTE[1].1);

    let bar = build_datasets(&data, ChartType::Bar);
    assert!(bar.iter().all(|d| !d.fill));
    assert_eq!(bar[0].label, "q1");
    assert_eq!(bar[0].data, data.series[0].values);
}

#[test]
fn palette_wraps_around() {
    assert_eq!(palette_color(PALETTE.len()), palette_color(0));
    assert_eq!(palette_color(PALETTE.len() + 3), PALETTE[3]);
}

#[test]
fn building_twice_gives_identical_output() {
    let result = sales();
    let rows = FilteredRows::unfiltered(&result, 0, vec![1, 2]);
    assert_eq!(build_series(&rows), build_series(&rows));
    assert_eq!(build_scatter_points(&rows), build_scatter_points(&rows));
}
