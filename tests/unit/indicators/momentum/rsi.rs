//! Unit tests for RSI indicator

use chrono::{Duration, NaiveDate};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use straznik::indicators::momentum::{calculate_rsi, rsi_series};
use straznik::models::market::{PriceBar, PriceSeries};

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceBar::new(start + Duration::days(i as i64), c, c, c, c, 1000.0))
        .collect();
    PriceSeries::new("TEST", bars).unwrap()
}

#[test]
fn test_rsi_hand_computed() {
    let values = rsi_series(&[1.0, 2.0, 1.0], 2);
    assert_eq!(values[0], None);
    assert_eq!(values[1], Some(100.0));
    let last = values[2].unwrap();
    assert!((last - 100.0 / 3.0).abs() < 1e-9, "got {}", last);
}

#[test]
fn test_rsi_first_bar_seeds_without_a_move() {
    assert_eq!(rsi_series(&[5.0], 1), vec![None]);
    assert_eq!(rsi_series(&[5.0, 6.0], 1), vec![None, Some(100.0)]);
    assert_eq!(rsi_series(&[5.0, 4.0], 1), vec![None, Some(0.0)]);
}

#[test]
fn test_rsi_insufficient_data() {
    let series = series_from_closes(&[10.0, 11.0, 12.0]);
    assert!(calculate_rsi(&series, 14).is_none());
}

#[test]
fn test_rsi_zero_period_is_undefined() {
    assert!(rsi_series(&[1.0, 2.0, 3.0], 0).iter().all(Option::is_none));
}

#[test]
fn test_rsi_rising_series_saturates() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let rsi = calculate_rsi(&series_from_closes(&closes), 14).unwrap();
    assert_eq!(rsi.value, 100.0);
    assert_eq!(rsi.period, 14);
}

#[test]
fn test_rsi_falling_series_hits_zero() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 - i as f64).collect();
    let rsi = calculate_rsi(&series_from_closes(&closes), 5).unwrap();
    assert_eq!(rsi.value, 0.0);
}

#[test]
fn test_rsi_flat_series_is_undefined() {
    let closes = vec![50.0; 30];
    assert!(calculate_rsi(&series_from_closes(&closes), 14).is_none());
}

#[test]
fn test_rsi_oscillating_series_stays_mid_range() {
    let closes: Vec<f64> = (0..60)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect();
    let rsi = calculate_rsi(&series_from_closes(&closes), 14).unwrap();
    assert!(rsi.value > 30.0 && rsi.value < 70.0, "got {}", rsi.value);
}

#[quickcheck]
fn prop_rsi_is_bounded(raw: Vec<u16>, period: u8) -> TestResult {
    let period = (period % 30) as usize + 1;
    if raw.len() < period + 1 {
        return TestResult::discard();
    }
    let closes: Vec<f64> = raw.iter().map(|&v| v as f64 + 1.0).collect();
    let bounded = rsi_series(&closes, period)
        .into_iter()
        .flatten()
        .all(|v| (0.0..=100.0).contains(&v));
    TestResult::from_bool(bounded)
}
