//! Static data provider: read-only tables loaded at startup

pub mod process;
pub mod skills;
pub mod team;

pub use process::{
    chart_steps, process_steps, sequence_order, ALTERNATE_ROUTES, PROGRAM_OVERVIEW, PROGRAM_TITLE, WORKFLOW_COMPLETED,
};
pub use skills::{role_skills, skills_for};
pub use team::{CORE_TEAM_OVERVIEW, CORE_TEAM_ROLES, STREAM_OVERVIEW};
