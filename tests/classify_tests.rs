use approx::assert_relative_eq;
use autochart::classify::{
    classify, is_date_like, is_date_like_cell, is_numeric_cell, to_numeric_or_null, CellKind,
};
use autochart::Cell;

#[test]
fn numbers_and_numeric_strings_are_numeric() {
    assert!(is_numeric_cell(&Cell::Number(3.0)));
    assert!(is_numeric_cell(&Cell::from("42")));
    assert!(is_numeric_cell(&Cell::from("-0.5")));
    assert!(!is_numeric_cell(&Cell::from("abc")));
    assert!(!is_numeric_cell(&Cell::from("")));
    assert!(!is_numeric_cell(&Cell::Null));
}

#[test]
fn comma_is_read_as_decimal_point() {
    assert_eq!(to_numeric_or_null(&Cell::from("1,5")), Some(1.5));
    assert_eq!(to_numeric_or_null(&Cell::from("3,75")), Some(3.75));
}

#[test]
fn every_comma_is_replaced_so_thousands_separators_misparse() {
    let thousands = to_numeric_or_null(&Cell::from("1,234")).expect("numeric");
    assert_relative_eq!(thousands, 1.234);

    // "1.234,56" becomes "1.234.56", which does not parse.
    assert_eq!(to_numeric_or_null(&Cell::from("1.234,56")), None);
    assert!(!is_numeric_cell(&Cell::from("1.234,56")));
}

#[test]
fn to_numeric_or_null_never_fails_on_garbage() {
    for raw in ["", " ", "--", "1e", "12abc", ",", "NaN"] {
        assert_eq!(to_numeric_or_null(&Cell::from(raw)), None, "input {raw:?}");
    }
    assert_eq!(to_numeric_or_null(&Cell::Null), None);
}

#[test]
fn iso_and_day_month_year_prefixes_are_date_like() {
    assert!(is_date_like("2024-01-15"));
    assert!(is_date_like("2024-01"));
    assert!(is_date_like("2024-01-15T10:30:00Z"));
    assert!(is_date_like("15/03/2024"));
    assert!(is_date_like("15/03/2024 08:00"));

    assert!(!is_date_like("2024"));
    assert!(!is_date_like("March 2024"));
    assert!(!is_date_like("1/3/2024"));
    assert!(!is_date_like(" 2024-01-15"));
}

#[test]
fn date_detection_does_not_validate_the_calendar() {
    assert!(is_date_like("2024-13-45"));
    assert!(is_date_like("31/02/2024"));
}

#[test]
fn numbers_are_never_date_like() {
    assert!(!is_date_like_cell(&Cell::Number(2024.0)));
    assert!(!is_date_like_cell(&Cell::Null));
    assert!(is_date_like_cell(&Cell::from("2024-02")));
}

#[test]
fn classify_returns_tagged_kinds() {
    assert_eq!(classify(&Cell::Number(7.0)), CellKind::Numeric(7.0));
    assert_eq!(classify(&Cell::from("2,5")), CellKind::Numeric(2.5));
    assert_eq!(classify(&Cell::from("2024-01")), CellKind::DateLike);
    assert_eq!(classify(&Cell::from("North")), CellKind::Text);
    assert_eq!(classify(&Cell::Null), CellKind::Null);
}

#[test]
fn year_month_prefix_is_enough_for_a_date() {
    assert!(is_date_like("1234-56 Main St"));
    assert!(!is_date_like("123-456"));
}
