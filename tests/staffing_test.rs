//! Tests for the staffing calculator and the participant slider scale

use rstest::rstest;

use upskill::application::services::{StaffingInput, StaffingService};
use upskill::domain::staffing::{CORE_TEAM, MAX_PARTICIPANTS, MIN_PARTICIPANTS, QUICK_SELECT};
use upskill::domain::{
    clamp_participants, compute_staffing, participants_to_slider_position, slider_position_to_participants,
};

#[rstest]
#[case(0.0, 10)]
#[case(33.33, 100)]
#[case(66.67, 500)]
#[case(100.0, 1000)]
#[case(-5.0, 10)]
#[case(250.0, 1000)]
fn given_slider_breakpoint_when_mapping_then_hits_labelled_count(#[case] position: f64, #[case] expected: u32) {
    assert_eq!(slider_position_to_participants(position), expected);
}

#[test]
fn given_slider_midway_between_breakpoints_when_mapping_then_interpolates() {
    // 50.0 is halfway between 33.33 and 66.67.
    assert_eq!(slider_position_to_participants(50.0), 300);
}

#[test]
fn given_any_count_when_mapping_to_slider_and_back_then_is_unchanged() {
    for participants in MIN_PARTICIPANTS..=MAX_PARTICIPANTS {
        let position = participants_to_slider_position(participants);
        assert!((0.0..=100.0).contains(&position));
        assert_eq!(slider_position_to_participants(position), participants, "at {participants}");
    }
}

#[test]
fn given_any_count_when_computing_then_total_is_core_plus_two_per_stream() {
    for participants in MIN_PARTICIPANTS..=MAX_PARTICIPANTS {
        let staffing = compute_staffing(participants);
        assert_eq!(staffing.streams, participants.div_ceil(10));
        assert_eq!(staffing.stream_managers, staffing.streams);
        assert_eq!(staffing.tech_leads, staffing.streams);
        assert_eq!(staffing.total_staff, CORE_TEAM + 2 * staffing.streams);
    }
}

#[rstest]
#[case(10, 1, 10)]
#[case(11, 2, 12)]
#[case(100, 10, 28)]
#[case(500, 50, 108)]
#[case(1000, 100, 208)]
fn given_quick_select_count_when_computing_then_matches_plan(
    #[case] participants: u32,
    #[case] streams: u32,
    #[case] total: u32,
) {
    let staffing = compute_staffing(participants);
    assert_eq!(staffing.core_team, 8);
    assert_eq!(staffing.streams, streams);
    assert_eq!(staffing.total_staff, total);
}

#[rstest]
#[case(-20, 10)]
#[case(5, 10)]
#[case(250, 250)]
#[case(5000, 1000)]
fn given_raw_count_when_clamping_then_stays_in_range(#[case] raw: i64, #[case] expected: u32) {
    assert_eq!(clamp_participants(raw), expected);
}

#[test]
fn given_presets_when_tabulating_then_one_report_per_preset() {
    let reports = StaffingService::new().table(&QUICK_SELECT);

    let totals: Vec<u32> = reports.iter().map(|r| r.result.total_staff).collect();
    assert_eq!(totals, vec![10, 28, 108, 208]);
    assert!(reports.iter().all(|r| !r.clamped));
}

#[test]
fn given_typed_count_above_range_when_reporting_then_flags_clamp() {
    let report = StaffingService::new().report(StaffingInput::Participants(1500));

    assert!(report.clamped);
    assert_eq!(report.result.participants, 1000);
    assert_eq!(report.slider_position, 100.0);
}
