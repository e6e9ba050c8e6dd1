use almanac_calendar::{CalendarError, Date, Difference};

fn date(year: i32, month: u8, day: u8) -> Date {
    Date::new(year, month, day).unwrap()
}

#[test]
fn scenario_add_and_subtract_days() {
    let d = date(2016, 4, 15);
    assert_eq!(d.to_string(), "4/15/2016");
    assert_eq!((d + 100_i64).unwrap(), date(2016, 7, 24));
    assert_eq!((d - 100_i64).unwrap(), date(2016, 1, 6));
    assert_eq!((50_i64 + d).unwrap(), (d + 50_i64).unwrap());
}

#[test]
fn scenario_difference_between_dates() {
    let d = date(2016, 4, 15);
    let d3 = date(2016, 5, 20);
    assert_eq!(d - d3, -35);
    assert_eq!(d.try_sub(&d3).unwrap(), Difference::Days(-35));

    let d4 = date(2000, 7, 10);
    assert_eq!(d - d4, d.ordinal() - d4.ordinal());
    assert_eq!(d - d4, 5758);
}

#[test]
fn add_zero_is_identity() {
    for d in [date(0, 1, 1), date(2016, 2, 29), date(9999, 12, 31)] {
        assert_eq!(d.checked_add(0).unwrap(), d);
        assert_eq!(d.checked_sub(0).unwrap(), d);
    }
}

#[test]
fn backward_uses_target_month_length() {
    assert_eq!(date(2016, 3, 1).checked_sub(1).unwrap(), date(2016, 2, 29));
    assert_eq!(date(2015, 3, 1).checked_sub(1).unwrap(), date(2015, 2, 28));
    assert_eq!(date(2016, 5, 1).checked_sub(1).unwrap(), date(2016, 4, 30));
    assert_eq!(date(2016, 1, 1).checked_sub(1).unwrap(), date(2015, 12, 31));
}

#[test]
fn crossing_below_year_zero_fails() {
    let start = date(0, 3, 1);
    let to_floor = start.ordinal();
    assert_eq!(start.checked_sub(to_floor).unwrap(), date(0, 1, 1));
    assert_eq!(
        start.checked_sub(to_floor + 1).unwrap_err(),
        CalendarError::InvalidYear { year: -1 }
    );
    assert_eq!(
        (date(1, 1, 1) - 10_000_i64).unwrap_err(),
        CalendarError::InvalidYear { year: -1 }
    );
}

#[test]
fn large_offsets_cross_many_cycles() {
    let d = date(2016, 4, 15);
    let far = d.checked_add(10_000_000).unwrap();
    assert_eq!(far - d, 10_000_000);
    assert_eq!(far.checked_sub(10_000_000).unwrap(), d);
}

#[test]
fn adding_dates_is_rejected_at_runtime() {
    let d = date(2016, 4, 15);
    assert!(matches!(
        d.try_add(&d),
        Err(CalendarError::UnsupportedOperand { .. })
    ));
}

#[test]
fn comparing_with_text_is_a_type_mismatch() {
    let d = date(2016, 4, 15);
    assert_eq!(
        d.try_lt(&"2016").unwrap_err(),
        CalendarError::TypeMismatch { found: "&str" }
    );
}
