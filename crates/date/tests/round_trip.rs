use kairos_calendar::{from_alias, CAL_360_DAY, CAL_GREGORIAN, CAL_NOLEAP};
use kairos_date::{CalendarDate, DateCollection};
use kairos_timevec::{Duration, TimeVector};

fn date(values: &[f64], calendar: kairos_calendar::CalendarRef) -> CalendarDate {
    CalendarDate::new(&TimeVector::from_values(values).unwrap(), calendar).unwrap()
}

#[test]
fn add_then_subtract_is_identity() {
    let starts = [
        date(&[2000.0, 3.0, 15.0, 6.0, 30.0, 0.0], &CAL_GREGORIAN),
        date(&[1999.0, 12.0, 31.0, 23.0, 59.0, 59.0], &CAL_GREGORIAN),
        date(&[2000.0, 2.0, 29.0, 0.0, 0.0, 0.0], &CAL_GREGORIAN),
    ];
    let deltas = [
        Duration::days(1.0),
        Duration::days(400.0),
        Duration::hours(25.0),
        Duration::minutes(61.0),
        Duration::seconds(7261.0),
        Duration::cycles(13.0),
        Duration::days(-1.0),
    ];
    for start in &starts {
        for delta in &deltas {
            let round = start.add(delta).unwrap().sub(delta).unwrap();
            assert_eq!(round, *start, "{start} +/- {delta}");
        }
    }
}

#[test]
fn round_trip_across_gregorian_transition() {
    let d = date(&[1582.0, 10.0, 4.0], &CAL_GREGORIAN);
    let there = d.add(&Duration::ONE_DAY).unwrap();
    assert_eq!(there.to_string(), "1582-10-15");
    assert_eq!(there.sub(&Duration::ONE_DAY).unwrap(), d);
}

#[test]
fn round_trip_in_360_day_calendar() {
    let d = date(&[1995.0, 2.0, 30.0], &CAL_360_DAY);
    let delta = Duration::days(30.0);
    assert_eq!(d.add(&delta).unwrap().sub(&delta).unwrap(), d);
    assert_eq!(d.add(&delta).unwrap().day(), 30);
}

#[test]
fn collection_round_trip_matches_scalar() {
    let rows: Vec<Vec<Option<f64>>> = (1..=10)
        .map(|day| vec![Some(2001.0), Some(2.0), Some(f64::from(day))])
        .collect();
    let c = DateCollection::from_rows(&rows, &CAL_NOLEAP).unwrap();
    let delta = Duration::days(45.0);
    let shifted = c.add_duration(&delta).unwrap();
    for (before, after) in c.iter().zip(shifted.iter()) {
        assert_eq!(before.add(&delta).unwrap(), *after);
        assert_eq!(after.sub(&delta).unwrap(), *before);
    }
}

#[test]
fn cf_alias_to_arithmetic_pipeline() {
    let cal = from_alias("365_day").unwrap();
    let d = date(&[2001.0, 1.0, 1.0], cal);
    let later = d.add(&Duration::days(364.0)).unwrap();
    assert_eq!((later.cycle(), later.day()), (12, 31));
    assert_eq!(later.add(&Duration::ONE_DAY).unwrap().year(), 2002);
}
