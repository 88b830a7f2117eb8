use super::*;

#[test]
fn next_rolls_over_year() {
    assert_eq!(Period { year: 2024, month: 12 }.next(), Period { year: 2025, month: 1 });
    assert_eq!(Period { year: 2024, month: 3 }.next(), Period { year: 2024, month: 4 });
}

#[test]
fn prev_rolls_back_year() {
    assert_eq!(Period { year: 2024, month: 1 }.prev(), Period { year: 2023, month: 12 });
    assert_eq!(Period { year: 2024, month: 3 }.prev(), Period { year: 2024, month: 2 });
}

#[test]
fn label_names_the_month() {
    assert_eq!(Period { year: 2024, month: 3 }.label(), "March 2024");
    assert_eq!(Period { year: 2024, month: 13 }.label(), "? 2024");
}

#[test]
fn current_month_is_in_range() {
    let now = Period::current();
    assert!((1..=12).contains(&now.month));
}

#[test]
fn serializes_as_plain_object() {
    let json = serde_json::to_string(&Period { year: 2024, month: 3 }).unwrap();
    assert_eq!(json, r#"{"year":2024,"month":3}"#);
}
