//! Domain layer: entities and pure computations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod staffing;

pub use entities::*;
pub use error::DomainError;
pub use geometry::{
    build_connections, layout_nodes, ring_sectors, route_below_anchor, route_connection, Connection,
    LabelAnchor, QuadCurve, RouteKind, RoutingOptions, Sector,
};
pub use interaction::{highlight_set_for, Event, InteractionState, InteractionStore};
pub use staffing::{
    clamp_participants, compute_staffing, participants_to_slider_position, slider_position_to_participants,
    StaffingResult,
};

/// Expand `~` and environment variables in a path-like string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
