//! Staffing service
//!
//! Turns raw calculator input (a typed count or a slider position) into a
//! staffing report.

use serde::Serialize;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::staffing::{MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use crate::domain::{
    clamp_participants, compute_staffing, participants_to_slider_position, slider_position_to_participants,
    StaffingResult,
};

/// Raw calculator input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaffingInput {
    /// Typed participant count, clamped into range.
    Participants(i64),
    /// Slider position in `0..=100`.
    Slider(f64),
}

#[derive(Serialize)]
struct PresetTable<'a> {
    presets: &'a [StaffingReport],
}

/// Staffing plus the calculator state that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StaffingReport {
    #[serde(flatten)]
    pub result: StaffingResult,
    /// Where the slider sits for this participant count.
    pub slider_position: f64,
    pub average_mentees_per_stream: u32,
    /// Mentees in the last stream, when it is not full.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_stream_mentees: Option<u32>,
    /// Whether a typed count was moved into range.
    pub clamped: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StaffingService;

impl StaffingService {
    pub fn new() -> Self {
        Self
    }

    /// Staffing for the given calculator input.
    pub fn report(&self, input: StaffingInput) -> StaffingReport {
        let (participants, clamped) = match input {
            StaffingInput::Participants(raw) => {
                let participants = clamp_participants(raw);
                (participants, i64::from(participants) != raw)
            }
            StaffingInput::Slider(position) => (slider_position_to_participants(position), false),
        };
        debug!("report: input={:?} participants={}", input, participants);

        let result = compute_staffing(participants);
        StaffingReport {
            result,
            slider_position: participants_to_slider_position(participants),
            average_mentees_per_stream: result.average_mentees_per_stream(),
            last_stream_mentees: result.last_stream_mentees(),
            clamped,
        }
    }

    /// Reports for each participant count, e.g. the quick-select presets.
    pub fn table(&self, counts: &[u32]) -> Vec<StaffingReport> {
        counts
            .iter()
            .map(|count| self.report(StaffingInput::Participants(i64::from(*count))))
            .collect()
    }

    /// Serialize a report as TOML.
    pub fn to_toml(&self, report: &StaffingReport) -> ApplicationResult<String> {
        toml::to_string_pretty(report).map_err(|e| ApplicationError::OperationFailed {
            context: "serialize staffing report".into(),
            source: Box::new(e),
        })
    }

    /// Serialize a preset table as TOML, one `[[presets]]` entry per report.
    pub fn table_to_toml(&self, reports: &[StaffingReport]) -> ApplicationResult<String> {
        toml::to_string_pretty(&PresetTable { presets: reports }).map_err(|e| ApplicationError::OperationFailed {
            context: "serialize staffing presets".into(),
            source: Box::new(e),
        })
    }

    /// The valid participant range, for usage messages.
    pub fn range(&self) -> (u32, u32) {
        (MIN_PARTICIPANTS, MAX_PARTICIPANTS)
    }
}
