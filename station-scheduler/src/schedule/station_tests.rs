//! End-to-end booking scenarios against a whole station.

use super::*;
use crate::domain::{BookingKind, Instant, StationId};
use proptest::prelude::*;

fn date() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn time(s: &str) -> Instant {
    Instant::parse_hhmm(s, date()).unwrap()
}

/// Station 1001 with platforms 1 and 2.
fn two_platform_station() -> Station {
    let mut station = Station::new(1001);
    station.add_platform(1).unwrap();
    station.add_platform(2).unwrap();
    station
}

fn conflict(kind: BookingKind, s: &str) -> BookingOutcome {
    BookingOutcome::Conflict {
        kind,
        existing: time(s),
    }
}

#[test]
fn reference_run() {
    let mut station = two_platform_station();

    assert_eq!(
        station.schedule_stoppage(1, time("10:00")),
        Ok(BookingOutcome::Accepted)
    );
    assert_eq!(
        station.schedule_through(1, time("10:30")),
        Ok(BookingOutcome::Accepted)
    );
    assert_eq!(
        station.schedule_stoppage(1, time("10:15")),
        Ok(conflict(BookingKind::Stoppage, "10:00"))
    );
    assert_eq!(
        station.schedule_through(1, time("10:05")),
        Ok(conflict(BookingKind::Through, "10:30"))
    );
}

#[test]
fn stoppages_exactly_half_an_hour_apart() {
    let mut station = two_platform_station();

    for s in ["10:00", "10:30", "11:00"] {
        assert_eq!(
            station.schedule_stoppage(1, time(s)),
            Ok(BookingOutcome::Accepted)
        );
    }

    let platform = station.platform(1).unwrap();
    assert_eq!(
        platform.stoppages(),
        &[time("10:00"), time("10:30"), time("11:00")]
    );
}

#[test]
fn through_gap_of_ten_minutes() {
    let mut station = two_platform_station();

    assert!(station.schedule_through(1, time("09:00")).unwrap().is_accepted());
    assert_eq!(
        station.schedule_through(1, time("09:09")),
        Ok(conflict(BookingKind::Through, "09:00"))
    );
    assert!(station.schedule_through(1, time("09:10")).unwrap().is_accepted());
}

#[test]
fn stoppage_and_through_at_same_instant() {
    let mut station = two_platform_station();

    assert!(station.schedule_stoppage(1, time("12:00")).unwrap().is_accepted());
    assert!(station.schedule_through(1, time("12:00")).unwrap().is_accepted());

    let platform = station.platform(1).unwrap();
    assert_eq!(platform.stoppages(), &[time("12:00")]);
    assert_eq!(platform.throughs(), &[time("12:00")]);
}

#[test]
fn unknown_platform() {
    let mut station = two_platform_station();
    let before = station.platforms().to_vec();

    assert_eq!(
        station.schedule(3, BookingKind::Stoppage, time("10:00")),
        Err(ScheduleError::PlatformNotFound(3))
    );
    assert_eq!(station.platforms(), before.as_slice());
}

#[test]
fn reissuing_accepted_booking_is_rejected() {
    let mut station = two_platform_station();
    station.schedule_stoppage(1, time("10:00")).unwrap();

    // A rejected call in between changes nothing
    station.schedule_stoppage(1, time("10:10")).unwrap();

    assert_eq!(
        station.schedule_stoppage(1, time("10:00")),
        Ok(conflict(BookingKind::Stoppage, "10:00"))
    );
    assert_eq!(station.platform(1).unwrap().stoppages(), &[time("10:00")]);
}

#[test]
fn platforms_are_independent() {
    let mut station = two_platform_station();

    assert!(station.schedule_stoppage(1, time("10:00")).unwrap().is_accepted());
    assert!(station.schedule_stoppage(2, time("10:00")).unwrap().is_accepted());
    assert!(station.schedule_stoppage(2, time("10:05")).unwrap().conflict().is_some());
    assert_eq!(station.platform(1).unwrap().stoppages().len(), 1);
}

#[test]
fn duplicate_platform_rejected() {
    let mut station = two_platform_station();
    station.schedule_stoppage(1, time("10:00")).unwrap();

    assert_eq!(
        station.add_platform(1),
        Err(ScheduleError::DuplicatePlatform(1))
    );
    assert_eq!(station.platforms().len(), 2);
    // The original platform keeps its bookings
    assert_eq!(station.platform(1).unwrap().stoppages(), &[time("10:00")]);
}

#[test]
fn platforms_keep_insertion_order() {
    let mut station = Station::new("Central");
    for id in [5, 2, 9] {
        station.add_platform(id).unwrap();
    }

    let ids: Vec<i32> = station.platforms().iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec![5, 2, 9]);
}

#[test]
fn negative_and_zero_platform_ids() {
    let mut station = Station::new(1001);
    station.add_platform(-1).unwrap();
    station.add_platform(0).unwrap();

    assert!(station.schedule_stoppage(-1, time("10:00")).unwrap().is_accepted());
    assert!(station.schedule_stoppage(0, time("10:00")).unwrap().is_accepted());
    assert_eq!(
        station.add_platform(-1),
        Err(ScheduleError::DuplicatePlatform(-1))
    );
    assert_eq!(
        station.schedule_through(-2, time("10:00")),
        Err(ScheduleError::PlatformNotFound(-2))
    );
}

#[test]
fn lines_allow_duplicates_but_not_blanks() {
    let mut station = Station::new(1001);
    station.add_line("Blue Line").unwrap();
    station.add_line("Yellow Line").unwrap();
    station.add_line("Blue Line").unwrap();

    assert!(matches!(
        station.add_line(""),
        Err(ScheduleError::InvalidLine(_))
    ));

    let names: Vec<&str> = station.lines().iter().map(|l| l.name()).collect();
    assert_eq!(names, vec!["Blue Line", "Yellow Line", "Blue Line"]);
}

#[test]
fn identity_survives_mutation() {
    let mut station = Station::new("KGX");
    station.add_line("Northern").unwrap();
    station.add_platform(1).unwrap();
    station.schedule_stoppage(1, time("10:00")).unwrap();
    let _ = station.schedule_stoppage(4, time("10:00"));

    assert_eq!(station.id(), &StationId::Text("KGX".into()));

    let station = Station::new(1001);
    assert_eq!(station.id(), &StationId::Number(1001));
}

#[test]
fn station_config_reaches_platforms() {
    let config = GapConfig::new(60, 20).unwrap();
    let mut station = Station::with_config(1, config);
    station.add_platform(1).unwrap();

    assert_eq!(station.platform(1).unwrap().config(), &config);
    station.schedule_stoppage(1, time("10:00")).unwrap();
    assert_eq!(
        station.schedule_stoppage(1, time("10:45")),
        Ok(conflict(BookingKind::Stoppage, "10:00"))
    );
}

proptest! {
    /// Scheduling fails with PlatformNotFound exactly for ids never added
    #[test]
    fn platform_not_found_iff_never_added(
        added in prop::collection::vec(-5i32..5, 0..6),
        target in -5i32..5
    ) {
        let mut station = Station::new(1);
        for id in &added {
            let _ = station.add_platform(*id);
        }

        let result = station.schedule(target, BookingKind::Through, time("10:00"));
        if added.contains(&target) {
            prop_assert_eq!(result, Ok(BookingOutcome::Accepted));
        } else {
            prop_assert_eq!(result, Err(ScheduleError::PlatformNotFound(target)));
        }
    }
}
