use autochart::filter::{distinct_categories, label_for, CategoryFilter, FilteredRows, NO_VALUE_LABEL};
use autochart::{Cell, TabularResult};

fn regions() -> TabularResult {
    TabularResult::new(
        vec!["region".into(), "sales".into()],
        vec![
            vec!["north".into(), 1.0.into()],
            vec!["south".into(), 2.0.into()],
            vec!["north".into(), 3.0.into()],
            vec![Cell::Null, 4.0.into()],
            vec![Cell::Number(7.0), 5.0.into()],
        ],
    )
}

#[test]
fn categories_keep_first_occurrence_order() {
    let categories: Vec<_> = distinct_categories(&regions(), 0).into_iter().collect();
    assert_eq!(categories, vec!["north", "south", NO_VALUE_LABEL, "7"]);
}

#[test]
fn labels_stringify_cells() {
    assert_eq!(label_for(&Cell::Null), NO_VALUE_LABEL);
    assert_eq!(label_for(&Cell::Number(2.5)), "2.5");
    assert_eq!(label_for(&Cell::from("x")), "x");
}

#[test]
fn default_filter_selects_everything() {
    let result = regions();
    let filter = CategoryFilter::all(&result, 0);
    assert!(!filter.is_touched());
    assert_eq!(filter.options(), filter.selected());

    let rows = FilteredRows::new(&result, &filter, 0, vec![1]);
    assert_eq!(rows.len(), result.height());
}

#[test]
fn selection_is_a_row_level_match_on_the_label() {
    let result = regions();
    let filter = CategoryFilter::all(&result, 0).with_selection(["north", NO_VALUE_LABEL]);
    assert!(filter.is_touched());

    let rows = FilteredRows::new(&result, &filter, 0, vec![1]);
    let values: Vec<_> = rows.y_cells(0).cloned().collect();
    assert_eq!(
        values,
        vec![Cell::Number(1.0), Cell::Number(3.0), Cell::Number(4.0)]
    );
    assert_eq!(rows.distinct_label_count(), 2);
}

#[test]
fn selection_keeps_option_order_and_drops_unknowns() {
    let result = regions();
    let filter = CategoryFilter::all(&result, 0).with_selection(["7", "atlantis", "north"]);
    let selected: Vec<_> = filter.selected().iter().cloned().collect();
    assert_eq!(selected, vec!["north", "7"]);
    assert_eq!(filter.options().len(), 4);
}

#[test]
fn empty_selection_filters_out_every_row() {
    let result = regions();
    let filter = CategoryFilter::all(&result, 0).with_selection(Vec::<String>::new());
    let rows = FilteredRows::new(&result, &filter, 0, vec![1]);
    assert!(rows.is_empty());
    assert!(rows.first_pair().is_none());
}

#[test]
fn missing_series_index_reads_as_null() {
    let result = regions();
    let rows = FilteredRows::unfiltered(&result, 0, vec![1]);
    assert!(rows.y_cells(3).all(Cell::is_null));
    assert_eq!(rows.x_name(), "region");
    assert_eq!(rows.y_names().collect::<Vec<_>>(), vec!["sales"]);
}
