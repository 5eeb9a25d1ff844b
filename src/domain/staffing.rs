//! Staffing calculator and participant slider scale
//!
//! A stream is one stream manager plus one tech lead looking after up to
//! [`MENTEES_PER_STREAM`] mentees. The core team does not grow with the
//! number of participants.

use serde::Serialize;

pub const CORE_TEAM: u32 = 8;
pub const MENTEES_PER_STREAM: u32 = 10;

pub const MIN_PARTICIPANTS: u32 = 10;
pub const MAX_PARTICIPANTS: u32 = 1000;

/// Participant count the calculator starts with.
pub const DEFAULT_PARTICIPANTS: u32 = 100;

/// Participant counts offered as one-click presets.
pub const QUICK_SELECT: [u32; 4] = [10, 100, 500, 1000];

/// Slider positions (0–100) and the participant counts they map to.
///
/// Labels sit evenly along the slider, so the 10–100 range gets a third of
/// its travel.
const SLIDER_BREAKPOINTS: [(f64, u32); 4] = [(0.0, 10), (33.33, 100), (66.67, 500), (100.0, 1000)];

/// Staffing derived from a participant count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaffingResult {
    pub participants: u32,
    pub core_team: u32,
    pub streams: u32,
    pub stream_managers: u32,
    pub tech_leads: u32,
    pub total_staff: u32,
    pub mentees_per_stream: u32,
}

impl StaffingResult {
    /// Mean stream size, rounded to the nearest mentee.
    pub fn average_mentees_per_stream(&self) -> u32 {
        if self.streams == 0 {
            return 0;
        }
        (f64::from(self.participants) / f64::from(self.streams)).round() as u32
    }

    /// Size of the last stream when it is not full.
    pub fn last_stream_mentees(&self) -> Option<u32> {
        match self.participants % self.mentees_per_stream {
            0 => None,
            rest => Some(rest),
        }
    }
}

/// Staffing for `participants`, expected in `10..=1000`.
///
/// Callers clamp with [`clamp_participants`]; the function itself is total and
/// does not clamp.
pub fn compute_staffing(participants: u32) -> StaffingResult {
    let streams = participants.div_ceil(MENTEES_PER_STREAM);
    let stream_managers = streams;
    let tech_leads = streams;
    StaffingResult {
        participants,
        core_team: CORE_TEAM,
        streams,
        stream_managers,
        tech_leads,
        total_staff: CORE_TEAM + stream_managers + tech_leads,
        mentees_per_stream: MENTEES_PER_STREAM,
    }
}

/// Clamp raw input into the calculator's domain.
pub fn clamp_participants(raw: i64) -> u32 {
    raw.clamp(i64::from(MIN_PARTICIPANTS), i64::from(MAX_PARTICIPANTS)) as u32
}

/// Linear blend that is exact at both ends.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Participant count for a slider position in `0..=100`.
pub fn slider_position_to_participants(position: f64) -> u32 {
    let (first_pos, first_value) = SLIDER_BREAKPOINTS[0];
    let (last_pos, last_value) = SLIDER_BREAKPOINTS[SLIDER_BREAKPOINTS.len() - 1];
    if position.is_nan() || position <= first_pos {
        return first_value;
    }
    if position >= last_pos {
        return last_value;
    }

    for pair in SLIDER_BREAKPOINTS.windows(2) {
        let ((p0, v0), (p1, v1)) = (pair[0], pair[1]);
        if position <= p1 {
            let t = (position - p0) / (p1 - p0);
            return lerp(f64::from(v0), f64::from(v1), t).round() as u32;
        }
    }
    last_value
}

/// Slider position for a participant count; breakpoints map back exactly.
pub fn participants_to_slider_position(participants: u32) -> f64 {
    let (first_pos, first_value) = SLIDER_BREAKPOINTS[0];
    let (last_pos, last_value) = SLIDER_BREAKPOINTS[SLIDER_BREAKPOINTS.len() - 1];
    if participants <= first_value {
        return first_pos;
    }
    if participants >= last_value {
        return last_pos;
    }

    for pair in SLIDER_BREAKPOINTS.windows(2) {
        let ((p0, v0), (p1, v1)) = (pair[0], pair[1]);
        if participants <= v1 {
            let t = f64::from(participants - v0) / f64::from(v1 - v0);
            return lerp(p0, p1, t);
        }
    }
    last_pos
}
