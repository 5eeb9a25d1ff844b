//! AI Upskill program visuals
//!
//! Radial process diagrams with hover/click highlighting, pie and donut
//! charts of the process and the AI skills per job family, and a staffing
//! calculator.

pub mod application;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod render;
pub mod util;
