//! End-to-end behavior of the full engine through the facade.

use kairos::{
    convex_hull, date, date_from_values, dates_from_rows, duration, period, DateError, Duration,
    Hull, PeriodError, Unit,
};

#[test]
fn hourly_sampling_scenario() {
    let start = date_from_values(&[1979.0, 1.0, 1.0, 0.0], "gregorian").unwrap();
    let end = date_from_values(&[1979.0, 1.0, 1.0, 6.0], "gregorian").unwrap();

    let closed = period(start, end, false, false).unwrap();
    let one_hour = duration(&[0.0, 0.0, 0.0, 1.0]).unwrap();
    let stamps = closed.regular_sample(&one_hour, None).unwrap();
    assert_eq!(stamps.len(), 7);
    assert_eq!(stamps.get(0).unwrap().to_string(), "1979-01-01T00Z");
    assert_eq!(stamps.get(6).unwrap().to_string(), "1979-01-01T06Z");

    let right_open = period(start, end, false, true).unwrap();
    let stamps = right_open.regular_sample(&one_hour, None).unwrap();
    assert_eq!(stamps.len(), 6);
    assert_eq!(stamps.get(5).unwrap().to_string(), "1979-01-01T05Z");
    assert_eq!(right_open.len(Unit::Hours).unwrap(), 6.0);
}

#[test]
fn daily_sampling_of_full_years() {
    for (alias, expected) in [
        ("noleap", 365),
        ("all_leap", 366),
        ("360_day", 360),
        ("julian", 365),
    ] {
        let start = date_from_values(&[2001.0, 1.0, 1.0], alias).unwrap();
        let end = date_from_values(&[2002.0, 1.0, 1.0], alias).unwrap();
        let year = period(start, end, false, true).unwrap();
        let stamps = year.regular_sample(&Duration::ONE_DAY, None).unwrap();
        assert_eq!(stamps.len(), expected, "{alias}");
    }
}

#[test]
fn zero_step_rejected_before_sampling() {
    let start = date(&[Some(2000.0)], "gregorian").unwrap();
    let end = date(&[Some(2001.0)], "gregorian").unwrap();
    let p = period(start, end, false, false).unwrap();
    let zero = duration(&[0.0]).unwrap();
    assert!(matches!(
        p.regular_sample(&zero, None).unwrap_err(),
        PeriodError::NonProgressingStep
    ));
}

#[test]
fn gregorian_transition_addition() {
    let d = date_from_values(&[1582.0, 10.0, 4.0], "standard").unwrap();
    let next = d.add(&Duration::ONE_DAY).unwrap();
    assert_eq!(next.to_string(), "1582-10-15");
}

#[test]
fn ambiguity_and_ordering() {
    let coarse = date(&[Some(2001.0)], "gregorian").unwrap();
    let fine = date(&[Some(2001.0), Some(6.0)], "gregorian").unwrap();
    assert!(matches!(
        coarse.gt_checked(&fine).unwrap_err(),
        DateError::AmbiguousComparison
    ));
    let a = date_from_values(&[2001.0, 1.0, 1.0], "gregorian").unwrap();
    let b = date_from_values(&[2001.0, 6.0, 1.0], "gregorian").unwrap();
    assert!(a.lt_checked(&b).unwrap());
}

#[test]
fn collection_aggregates() {
    let rows: Vec<Vec<Option<f64>>> = (1..=12)
        .map(|cycle| vec![Some(2000.0), Some(f64::from(cycle)), Some(15.0)])
        .collect();
    let c = dates_from_rows(&rows, "noleap").unwrap();
    let min = c.min().unwrap();
    let max = c.max().unwrap();
    assert_eq!(min.cycle(), 1);
    assert_eq!(max.cycle(), 12);
    for d in c.iter() {
        assert_ne!(min.cmp_instant(d), std::cmp::Ordering::Greater);
        assert_ne!(max.cmp_instant(d), std::cmp::Ordering::Less);
    }
    match convex_hull(&c).unwrap() {
        Hull::Span(p) => {
            assert_eq!(p.initial_date().cycle(), 1);
            assert_eq!(p.final_date().cycle(), 12);
        }
        Hull::Point(_) => panic!("expected a span"),
    }
}

#[test]
fn round_trip_property() {
    let d = date_from_values(&[2000.0, 3.0, 15.0, 6.0, 30.0, 0.0], "proleptic_gregorian")
        .unwrap();
    for delta in [
        Duration::days(100.0),
        Duration::hours(36.0),
        Duration::seconds(86_399.0),
    ] {
        assert_eq!(d.add(&delta).unwrap().sub(&delta).unwrap(), d);
    }
}

#[test]
fn duration_equality_contract() {
    let one_day = duration(&[0.0, 0.0, 1.0]).unwrap();
    let day_in_hours = duration(&[0.0, 0.0, 0.0, 24.0]).unwrap();
    assert!(one_day.eq_checked(&day_in_hours).unwrap());

    let one_year = duration(&[1.0]).unwrap();
    let year_in_days = duration(&[0.0, 0.0, 365.0]).unwrap();
    assert!(one_year.eq_checked(&year_in_days).is_err());
}

#[test]
fn storage_round_trip_through_raw() {
    let rows = vec![
        vec![Some(1979.0), Some(1.0), Some(1.0), Some(0.0)],
        vec![Some(1979.0), Some(1.0), Some(1.0), Some(6.0)],
    ];
    let c = dates_from_rows(&rows, "gregorian").unwrap();
    let raws = c.to_raw();
    assert!(raws.iter().all(|raw| raw.set[3] && !raw.set[4]));
    let back = kairos::DateCollection::from_raw(&raws, kairos::from_alias("gregorian").unwrap())
        .unwrap();
    assert_eq!(back, c);
}

#[test]
fn leap_rule_matches_standard() {
    let cal = kairos::from_alias("proleptic_gregorian").unwrap();
    for year in [1600, 1700, 1900, 2000, 2004, 2023, 2100] {
        let expected = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        assert_eq!(cal.is_leap(year).unwrap(), expected);
    }
}
