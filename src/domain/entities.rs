//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Who performs a process step. Drives colour coding and grouping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Contributor,
    TeamManager,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Contributor, Role::TeamManager];

    /// Display label used in badges and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Contributor => "Contributor",
            Role::TeamManager => "Team Manager",
        }
    }

    /// Class name for the role badge (`team-manager`).
    pub fn css_class(&self) -> &'static str {
        match self {
            Role::Contributor => "contributor",
            Role::TeamManager => "team-manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One step of the upskill workflow.
///
/// `connects_to` holds step names, not indices: the graph is kept exactly as
/// declared, including edges that jump forward or backward in `step_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub name: String,
    pub role: Role,
    pub description: String,
    pub phase: String,
    pub step_number: u32,
    pub connects_to: Vec<String>,
}

impl ProcessStep {
    pub fn new(
        name: impl Into<String>,
        role: Role,
        description: impl Into<String>,
        phase: impl Into<String>,
        step_number: u32,
        connects_to: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            role,
            description: description.into(),
            phase: phase.into(),
            step_number,
            connects_to: connects_to.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn connects(&self, name: &str) -> bool {
        self.connects_to.iter().any(|c| c == name)
    }
}

/// Find a step by its unique name.
pub fn find_step<'a>(steps: &'a [ProcessStep], name: &str) -> Option<&'a ProcessStep> {
    steps.iter().find(|s| s.name == name)
}

/// Screen-space point (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A process step projected onto the circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    /// `node-<step_number>`
    pub id: String,
    pub step: &'a ProcessStep,
    /// Radians, `-π/2` is the top of the circle.
    pub angle: f64,
    pub position: Point,
}

impl Node<'_> {
    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}

/// Content of the details view for a selected step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDetails {
    pub name: String,
    pub role: Role,
    pub phase: String,
    pub description: String,
    pub step_number: u32,
    pub connects_to: Vec<String>,
}

impl From<&ProcessStep> for StepDetails {
    fn from(step: &ProcessStep) -> Self {
        Self {
            name: step.name.clone(),
            role: step.role,
            phase: step.phase.clone(),
            description: step.description.clone(),
            step_number: step.step_number,
            connects_to: step.connects_to.clone(),
        }
    }
}

/// Knowledge area a skill belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AiArea {
    Fundamentals,
    DrivenSdlc,
    DrivenSoftwareSolution,
}

impl AiArea {
    pub const ALL: [AiArea; 3] = [
        AiArea::Fundamentals,
        AiArea::DrivenSdlc,
        AiArea::DrivenSoftwareSolution,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AiArea::Fundamentals => "AI Fundamentals",
            AiArea::DrivenSdlc => "AI-Driven SDLC",
            AiArea::DrivenSoftwareSolution => "AI-Driven Software Solution",
        }
    }
}

impl fmt::Display for AiArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub area: AiArea,
}

/// Job families the skills catalogue is organised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SkillRole {
    BusinessAnalyst,
    Developer,
    Architects,
    Designers,
    DevOps,
    ProductManagers,
    ProjectDeliveryManagers,
    QaTestAutomation,
    OtherRoles,
}

impl SkillRole {
    pub const ALL: [SkillRole; 9] = [
        SkillRole::BusinessAnalyst,
        SkillRole::Developer,
        SkillRole::Architects,
        SkillRole::Designers,
        SkillRole::DevOps,
        SkillRole::ProductManagers,
        SkillRole::ProjectDeliveryManagers,
        SkillRole::QaTestAutomation,
        SkillRole::OtherRoles,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillRole::BusinessAnalyst => "Business Analyst",
            SkillRole::Developer => "Developer",
            SkillRole::Architects => "Architects",
            SkillRole::Designers => "Designers",
            SkillRole::DevOps => "DevOps",
            SkillRole::ProductManagers => "Product Managers",
            SkillRole::ProjectDeliveryManagers => "Project/Delivery Managers",
            SkillRole::QaTestAutomation => "QA & Test Automation",
            SkillRole::OtherRoles => "Other Roles",
        }
    }

    /// Short command-line name (`business-analyst`, `qa`).
    pub fn slug(&self) -> &'static str {
        match self {
            SkillRole::BusinessAnalyst => "business-analyst",
            SkillRole::Developer => "developer",
            SkillRole::Architects => "architects",
            SkillRole::Designers => "designers",
            SkillRole::DevOps => "devops",
            SkillRole::ProductManagers => "product-managers",
            SkillRole::ProjectDeliveryManagers => "delivery-managers",
            SkillRole::QaTestAutomation => "qa",
            SkillRole::OtherRoles => "other",
        }
    }
}

impl fmt::Display for SkillRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillRole {
    type Err = DomainError;

    /// Accepts either the slug or the display label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SkillRole::ALL
            .into_iter()
            .find(|r| r.slug().eq_ignore_ascii_case(wanted) || r.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownRole(wanted.to_string()))
    }
}

/// Skills catalogue entry for one job family.
#[derive(Debug, Clone, Copy)]
pub struct RoleSkills {
    pub role: SkillRole,
    pub skills: &'static [Skill],
}

impl RoleSkills {
    pub fn skills_in(&self, area: AiArea) -> impl Iterator<Item = &Skill> + '_ {
        self.skills.iter().filter(move |s| s.area == area)
    }
}

/// Permanent coordination role of the program's core team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreTeamRole {
    pub name: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_slug_or_label_when_parsing_skill_role_then_resolves() {
        assert_eq!("qa".parse::<SkillRole>().unwrap(), SkillRole::QaTestAutomation);
        assert_eq!(
            "project/delivery managers".parse::<SkillRole>().unwrap(),
            SkillRole::ProjectDeliveryManagers
        );
        assert!("astronaut".parse::<SkillRole>().is_err());
    }

    #[test]
    fn given_role_when_formatting_then_uses_badge_label() {
        assert_eq!(Role::TeamManager.to_string(), "Team Manager");
        assert_eq!(Role::TeamManager.css_class(), "team-manager");
    }

    #[test]
    fn given_two_points_when_measuring_then_returns_euclidean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
