use adpulse::analytics::{forecast, ols, Outcome, Unavailable};
use adpulse::data::{Dataset, Record};
use chrono::NaiveDate;
use proptest::prelude::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dataset(points: &[(NaiveDate, f64)]) -> Dataset {
    let columns = vec!["date".into(), "spend".into()];
    let rows = points
        .iter()
        .map(|(date, spend)| Record {
            date: Some(*date),
            spend: *spend,
            ..Record::default()
        })
        .collect();
    Dataset::new(columns, rows)
}

#[test]
fn two_point_rising_trend_extrapolates_exactly() {
    // slope 100/day through (2024-01-01, 100) and (2024-01-02, 200)
    let data = dataset(&[(day(2024, 1, 1), 100.0), (day(2024, 1, 2), 200.0)]);
    let Outcome::Ready(points) = forecast::predict(&data, 1) else {
        panic!("expected forecast");
    };
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].date, day(2024, 1, 3));
    assert!((points[0].predicted_revenue - 300.0).abs() < 1e-6);
}

#[test]
fn emits_exactly_n_consecutive_days_after_history() {
    let data = dataset(&[
        (day(2024, 3, 1), 10.0),
        (day(2024, 3, 2), 12.0),
        (day(2024, 3, 5), 18.0),
    ]);
    let Outcome::Ready(points) = forecast::predict(&data, 7) else {
        panic!("expected forecast");
    };
    assert_eq!(points.len(), 7);
    assert_eq!(points[0].date, day(2024, 3, 6));
    for pair in points.windows(2) {
        assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
    }
}

#[test]
fn single_day_of_history_is_unavailable() {
    // two rows on the same day still collapse to one point
    let data = dataset(&[(day(2024, 1, 1), 100.0), (day(2024, 1, 1), 50.0)]);
    assert_eq!(
        forecast::predict(&data, 7),
        Outcome::Unavailable(Unavailable::InsufficientHistory)
    );
}

#[test]
fn missing_columns_are_unavailable() {
    let data = Dataset::new(vec!["advertiser".into()], vec![Record::default()]);
    assert_eq!(
        forecast::predict(&data, 7),
        Outcome::Unavailable(Unavailable::MissingColumn("date"))
    );
}

#[test]
fn declining_trend_clamps_at_zero() {
    let data = dataset(&[(day(2024, 1, 1), 100.0), (day(2024, 1, 2), 1.0)]);
    let Outcome::Ready(points) = forecast::predict(&data, 10) else {
        panic!("expected forecast");
    };
    assert!(points.iter().all(|p| p.predicted_revenue >= 0.0));
    // slope -99/day: everything past the first step has hit the floor
    assert_eq!(points.last().unwrap().predicted_revenue, 0.0);
}

#[test]
fn daily_series_sums_and_sorts() {
    let data = dataset(&[
        (day(2024, 1, 2), 5.0),
        (day(2024, 1, 1), 1.0),
        (day(2024, 1, 2), 7.0),
    ]);
    let series = forecast::daily_series(&data);
    let entries: Vec<_> = series.into_iter().collect();
    assert_eq!(entries, vec![(day(2024, 1, 1), 1.0), (day(2024, 1, 2), 12.0)]);
}

#[test]
fn zero_variance_feature_fits_a_flat_mean_line() {
    let fit = ols::least_squares(&[(5.0, 10.0), (5.0, 30.0)]);
    assert_eq!(fit.slope, 0.0);
    assert_eq!(fit.intercept, 20.0);
    assert_eq!(fit.at(100.0), 20.0);
}

#[test]
fn least_squares_recovers_an_exact_line() {
    let points: Vec<(f64, f64)> = (0..10).map(|x| (x as f64, 3.0 * x as f64 + 7.0)).collect();
    let fit = ols::least_squares(&points);
    assert!((fit.slope - 3.0).abs() < 1e-9);
    assert!((fit.intercept - 7.0).abs() < 1e-9);
}

proptest! {
    #[test]
    fn forecasts_are_total_and_non_negative(
        spends in proptest::collection::vec(0.0f64..10_000.0, 2..40),
        days in 1u32..=30,
    ) {
        let start = day(2024, 1, 1);
        let points: Vec<(NaiveDate, f64)> = spends
            .iter()
            .enumerate()
            .map(|(i, spend)| (start + chrono::Duration::days(i as i64), *spend))
            .collect();
        let Outcome::Ready(forecasted) = forecast::predict(&dataset(&points), days) else {
            panic!("two distinct days must always forecast");
        };
        prop_assert_eq!(forecasted.len(), days as usize);
        let last_history = points.last().unwrap().0;
        for (i, point) in forecasted.iter().enumerate() {
            prop_assert!(point.predicted_revenue >= 0.0);
            prop_assert_eq!(point.date, last_history + chrono::Duration::days(i as i64 + 1));
        }
    }
}
