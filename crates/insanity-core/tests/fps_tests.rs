// Host-side tests for the FPS counter and window title formatting.

use std::time::Duration;

use insanity_core::{fps_title, FpsCounter};
use instant::Instant;

#[test]
fn fps_counter_waits_for_a_full_second() {
    let start = Instant::now();
    let mut counter = FpsCounter::new(start);
    for i in 1..60 {
        let now = start + Duration::from_millis(16 * i);
        assert_eq!(counter.frame(now), None, "reported early at frame {i}");
    }
}

#[test]
fn fps_counter_reports_average_rate() {
    let start = Instant::now();
    let mut counter = FpsCounter::new(start);
    let mut report = None;
    for i in 1..=50 {
        report = counter.frame(start + Duration::from_millis(20 * i));
    }
    let fps = report.expect("report after one second");
    assert!((fps - 50.0).abs() < 1e-6, "fps was {fps}");
}

#[test]
fn fps_counter_resets_after_report() {
    let start = Instant::now();
    let mut counter = FpsCounter::new(start);
    assert!(counter.frame(start + Duration::from_millis(1000)).is_some());
    assert_eq!(counter.frame(start + Duration::from_millis(1500)), None);
    let fps = counter
        .frame(start + Duration::from_millis(2000))
        .expect("second report");
    assert!((fps - 2.0).abs() < 1e-9);
}

#[test]
fn fps_title_uses_two_decimals() {
    assert_eq!(fps_title(59.999), "FPS: 60.00");
    assert_eq!(fps_title(62.5), "FPS: 62.50");
    assert_eq!(fps_title(0.0), "FPS: 0.00");
}
