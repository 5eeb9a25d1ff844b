//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem) but are themselves
//! concrete structs, not traits.

mod diagram;
mod staffing;

pub use diagram::{DiagramKind, DiagramRequest, DiagramService, RenderedDiagram};
pub use staffing::{StaffingInput, StaffingReport, StaffingService};
