//! Core team roles of the program organisation.

use crate::domain::CoreTeamRole;

pub const CORE_TEAM_OVERVIEW: &str = "A permanent coordination group responsible for program governance, \
delivery control, DevOps support, and architectural oversight. This team ensures consistency, quality \
standards, and a unified operational model across all streams.";

pub const STREAM_OVERVIEW: &str = "Each upskilling stream is formed as an independent, repeatable module \
consisting of a Stream Manager, who ensures delivery flow and communication, and a Tech Lead, who provides \
technical supervision and guidance.";

pub const CORE_TEAM_ROLES: &[CoreTeamRole] = &[
    CoreTeamRole {
        name: "Head of Program",
        description: "Oversees the entire AI Upskill Program, sets strategic direction, ensures alignment \
                      with organizational goals, and manages overall program governance and success metrics.",
    },
    CoreTeamRole {
        name: "Program Coordinator",
        description: "Manages day-to-day program operations, coordinates between different teams and \
                      streams, handles logistics, scheduling, and ensures smooth program delivery across all streams.",
    },
    CoreTeamRole {
        name: "Upskill Coordinator",
        description: "Focuses specifically on the upskilling curriculum and participant journey, manages \
                      learning materials, tracks progress, and ensures quality of educational content and delivery.",
    },
    CoreTeamRole {
        name: "DevOps Team (x3)",
        description: "Provides technical infrastructure support, maintains platform stability, manages \
                      deployment pipelines, monitors system performance, and ensures the technical foundation \
                      for program delivery.",
    },
    CoreTeamRole {
        name: "Program Architect",
        description: "Designs the overall program structure and architecture, defines technical standards, \
                      ensures scalability, and provides architectural guidance to all streams and teams.",
    },
];
