// Download progress tracking.

use rings_core::*;

#[test]
fn percent_is_floor_of_ratio() {
    assert_eq!(LoadProgress::new(0, 1000).percent(), Some(0));
    assert_eq!(LoadProgress::new(999, 1000).percent(), Some(99));
    assert_eq!(LoadProgress::new(1, 3).percent(), Some(33));
    assert_eq!(LoadProgress::new(2, 3).percent(), Some(66));
    assert_eq!(LoadProgress::new(1000, 1000).percent(), Some(100));
}

#[test]
fn unknown_total_reports_nothing() {
    assert_eq!(LoadProgress::new(512, 0).percent(), None);
    let mut tracker = ProgressTracker::new();
    assert_eq!(tracker.on_progress(LoadProgress::new(512, 0)), None);
    assert_eq!(tracker.last_percent(), None);
}

#[test]
fn overshoot_is_clamped() {
    assert_eq!(LoadProgress::new(5000, 1000).percent(), Some(100));
}

#[test]
fn huge_files_do_not_overflow() {
    let total = u64::MAX / 2;
    assert_eq!(LoadProgress::new(total / 2, total).percent(), Some(49));
}

#[test]
fn tracker_never_goes_backwards() {
    let mut tracker = ProgressTracker::new();
    let seq = [(10, 100), (40, 100), (30, 100), (40, 100), (100, 100)];
    let mut reported = Vec::new();
    for (loaded, total) in seq {
        reported.extend(tracker.on_progress(LoadProgress::new(loaded, total)));
    }
    assert_eq!(reported, [10, 40, 40, 40, 100]);
    assert!(reported.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn completion_fires_once() {
    let mut tracker = ProgressTracker::new();
    assert!(!tracker.is_complete());
    assert!(tracker.complete());
    assert!(!tracker.complete());
    assert!(tracker.is_complete());
}
