use autochart::advisor::{suggest_chart_type, ChartType, PIE_SUGGESTION_MAX_CATEGORIES};
use autochart::filter::FilteredRows;
use autochart::{Cell, TabularResult};

fn table(columns: &[&str], rows: Vec<Vec<Cell>>) -> TabularResult {
    TabularResult::new(columns.iter().map(|c| c.to_string()).collect(), rows)
}

fn suggest(result: &TabularResult, x: usize, ys: &[usize]) -> ChartType {
    let rows = FilteredRows::unfiltered(result, x, ys.to_vec());
    suggest_chart_type(&rows).chart_type
}

#[test]
fn monthly_values_suggest_line() {
    let result = table(
        &["month", "revenue"],
        vec![
            vec!["2024-01".into(), 100.0.into()],
            vec!["2024-02".into(), 150.0.into()],
            vec!["2024-03".into(), 120.0.into()],
        ],
    );
    let rows = FilteredRows::unfiltered(&result, 0, vec![1]);
    let suggestion = suggest_chart_type(&rows);
    assert_eq!(suggestion.chart_type, ChartType::Line);
    assert!(suggestion.reason.contains("month"));
}

#[test]
fn few_regions_suggest_pie() {
    let result = table(
        &["region", "sales"],
        ["north", "south", "east", "west", "center"]
            .iter()
            .enumerate()
            .map(|(i, r)| vec![(*r).into(), (i as f64 * 10.0 + 5.0).into()])
            .collect(),
    );
    assert_eq!(suggest(&result, 0, &[1]), ChartType::Pie);
}

#[test]
fn numeric_pairs_with_many_distinct_x_suggest_scatter() {
    let rows = (0..10)
        .map(|i| vec![(10.0 + i as f64).into(), (i as f64 * 3.0).into()])
        .collect();
    let result = table(&["price", "quantity"], rows);
    assert_eq!(suggest(&result, 0, &[1]), ChartType::Scatter);
}

#[test]
fn numeric_x_with_few_rows_prefers_pie_over_scatter() {
    let rows = (0..PIE_SUGGESTION_MAX_CATEGORIES)
        .map(|i| vec![(i as f64).into(), (i as f64 + 1.0).into()])
        .collect();
    let result = table(&["price", "quantity"], rows);
    assert_eq!(suggest(&result, 0, &[1]), ChartType::Pie);
}

#[test]
fn many_text_categories_suggest_bar() {
    let rows = (0..12)
        .map(|i| vec![format!("product-{i}").into(), (i as f64).into()])
        .collect();
    let result = table(&["product", "units"], rows);
    let rows = FilteredRows::unfiltered(&result, 0, vec![1]);
    let suggestion = suggest_chart_type(&rows);
    assert_eq!(suggestion.chart_type, ChartType::Bar);
    assert!(suggestion.reason.contains("text categories"));
}

#[test]
fn dates_with_a_missing_value_fall_back_to_bar() {
    let result = table(
        &["day", "visits"],
        vec![
            vec!["2024-01-01".into(), 5.0.into()],
            vec!["2024-01-02".into(), Cell::Null],
        ],
    );
    let rows = FilteredRows::unfiltered(&result, 0, vec![1]);
    let suggestion = suggest_chart_type(&rows);
    assert_eq!(suggestion.chart_type, ChartType::Bar);
    assert!(suggestion.reason.contains("default"));
}

#[test]
fn date_check_runs_before_the_category_count_check() {
    // Three dated rows also satisfy the pie predicate; line must win.
    let result = table(
        &["date", "amount"],
        vec![
            vec!["15/03/2024".into(), "1,5".into()],
            vec!["16/03/2024".into(), "2,5".into()],
            vec!["17/03/2024".into(), 4.0.into()],
        ],
    );
    assert_eq!(suggest(&result, 0, &[1]), ChartType::Line);
}

#[test]
fn multiple_series_over_dates_suggest_line() {
    let result = table(
        &["month", "north", "south"],
        vec![
            vec!["2024-01".into(), 1.0.into(), 2.0.into()],
            vec!["2024-02".into(), 3.0.into(), Cell::Null],
        ],
    );
    let rows = FilteredRows::unfiltered(&result, 0, vec![1, 2]);
    let suggestion = suggest_chart_type(&rows);
    assert_eq!(suggestion.chart_type, ChartType::Line);
    assert!(suggestion.reason.contains("2 series"));
}

#[test]
fn multiple_series_over_text_suggest_bar() {
    let result = table(
        &["region", "q1", "q2"],
        vec![
            vec!["north".into(), 1.0.into(), 2.0.into()],
            vec!["south".into(), 3.0.into(), 4.0.into()],
        ],
    );
    assert_eq!(suggest(&result, 0, &[1, 2]), ChartType::Bar);
}

#[test]
fn chart_type_names_are_lowercase() {
    assert_eq!(ChartType::Doughnut.to_string(), "doughnut");
    assert_eq!(
        serde_json::to_string(&ChartType::Scatter).expect("serialize"),
        "\"scatter\""
    );
    assert!(ChartType::Pie.is_radial());
    assert!(!ChartType::Area.is_radial());
}
