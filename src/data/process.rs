//! The upskill workflow, shared by every process view.
//!
//! Step numbers are labels, not positions: the practical part runs
//! 6 → 10 → 8 → 9 and the table keeps those edges as declared.

use crate::domain::{ProcessStep, Role};

/// Name of the synthetic terminal step that closes the workflow circle.
pub const WORKFLOW_COMPLETED: &str = "Workflow Completed";

/// Title shown in the middle of the radial and pie views.
pub const PROGRAM_TITLE: &str = "AI Upskill Program";

pub const PROGRAM_OVERVIEW: &str = "The AI Upskill Program is a comprehensive learning journey designed to \
enhance AI capabilities across different roles. It consists of theoretical learning, practical application, \
and skill validation phases.";

/// Connections drawn below the first node instead of across the circle.
///
/// A jump from the theory straight to completion would cut through the center
/// label as a plain curve. The table declares no such edge, so the route only
/// applies to tables that add it.
pub const ALTERNATE_ROUTES: &[(&str, &str)] = &[("Complete theoretical part", WORKFLOW_COMPLETED)];

/// All workflow steps in circle order.
pub fn process_steps() -> Vec<ProcessStep> {
    vec![
        ProcessStep::new(
            "Apply to program",
            Role::Contributor,
            "Contributor submits an application to join the AI Upskill Program.",
            "Initiation",
            1,
            &["Complete theoretical part"],
        ),
        ProcessStep::new(
            "Complete theoretical part",
            Role::Contributor,
            "Contributor completes the self-paced theoretical learning component.\n\
             In some cases, the practical part can be skipped.",
            "Theoretical Part (Self-paced)",
            2,
            &["Apply to Practical part"],
        ),
        ProcessStep::new(
            "Apply to Practical part",
            Role::Contributor,
            "Apply to practical part or skip it. Optional path: Contributor applies to participate in the practical part.",
            "Theoretical Part (Self-paced)",
            3,
            &["Onboard contributor to Dev Team and assign a task"],
        ),
        ProcessStep::new(
            "Onboard contributor to Dev Team and assign a task",
            Role::TeamManager,
            "Team Manager onboards the contributor to the development team and assigns practical tasks.",
            "Waiting for Project",
            4,
            &["Complete ≥1 task"],
        ),
        ProcessStep::new(
            "Complete ≥1 task",
            Role::Contributor,
            "Contributor completes at least one practical task assigned by the Team Manager.",
            "Practical Part",
            5,
            &["Send knowledge check"],
        ),
        ProcessStep::new(
            "Send knowledge check",
            Role::TeamManager,
            "Team Manager sends a knowledge check to the contributor after they complete their assigned task(s).",
            "Practical Part",
            6,
            &["Pass knowledge check"],
        ),
        ProcessStep::new(
            "Pass knowledge check",
            Role::Contributor,
            "Contributor successfully passes the knowledge check sent by the Team Manager.",
            "Practical Part",
            10,
            &["Assign AI UpSkill Program Badge"],
        ),
        ProcessStep::new(
            "Assign AI UpSkill Program Badge",
            Role::TeamManager,
            "Team Manager assigns the AI ENABLER PRACTITIONER badge to the contributor.",
            "Practical Part",
            8,
            &["Provide list of gained skills"],
        ),
        ProcessStep::new(
            "Provide list of gained skills",
            Role::TeamManager,
            "Team Manager provides a comprehensive list of skills that the contributor has gained.",
            "Practical Part",
            9,
            &["Add gained skills to Telescope profile"],
        ),
        ProcessStep::new(
            "Add gained skills to Telescope profile",
            Role::Contributor,
            "Final step: Contributor adds all the skills gained during the program to their Telescope profile.",
            "Ending",
            11,
            &[WORKFLOW_COMPLETED],
        ),
        ProcessStep::new(
            WORKFLOW_COMPLETED,
            Role::Contributor,
            "The AI Upskill Program workflow has been successfully completed. All steps have been finished \
             and skills have been documented.",
            "Completion",
            12,
            &[],
        ),
    ]
}

/// Steps shown as pie segments: every step except the completion marker.
pub fn chart_steps(steps: &[ProcessStep]) -> Vec<ProcessStep> {
    steps
        .iter()
        .filter(|s| s.name != WORKFLOW_COMPLETED)
        .cloned()
        .collect()
}

/// Steps ordered by their step number, as the sequence listing shows them.
pub fn sequence_order(steps: &[ProcessStep]) -> Vec<&ProcessStep> {
    let mut ordered: Vec<_> = steps.iter().collect();
    ordered.sort_by_key(|s| s.step_number);
    ordered
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::find_step;

    #[test]
    fn given_process_table_when_checking_names_then_all_unique() {
        let steps = process_steps();
        let names: HashSet<_> = steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), steps.len());
    }

    #[test]
    fn given_process_table_when_resolving_connections_then_every_target_exists() {
        let steps = process_steps();
        for step in &steps {
            for target in &step.connects_to {
                assert!(find_step(&steps, target).is_some(), "{} -> {}", step.name, target);
            }
        }
    }

    #[test]
    fn given_knowledge_check_when_following_edge_then_jumps_to_step_ten() {
        let steps = process_steps();
        let send = find_step(&steps, "Send knowledge check").unwrap();
        let next = find_step(&steps, &send.connects_to[0]).unwrap();
        assert_eq!(next.step_number, 10);
    }

    #[test]
    fn given_alternate_routes_when_checking_then_endpoints_are_known_steps() {
        let steps = process_steps();
        for (from, to) in ALTERNATE_ROUTES {
            assert!(find_step(&steps, from).is_some(), "{from}");
            assert!(find_step(&steps, to).is_some(), "{to}");
        }
    }

    #[test]
    fn given_theoretical_part_when_reading_edges_then_only_leads_to_practical_part() {
        let steps = process_steps();
        let theory = find_step(&steps, "Complete theoretical part").unwrap();
        assert_eq!(theory.connects_to, vec!["Apply to Practical part".to_string()]);
        let edges: usize = steps.iter().map(|s| s.connects_to.len()).sum();
        assert_eq!(edges, steps.len() - 1);
    }

    #[test]
    fn given_process_table_when_selecting_chart_steps_then_drops_completion_marker() {
        let steps = process_steps();
        let chart = chart_steps(&steps);
        assert_eq!(chart.len(), 10);
        assert!(find_step(&chart, WORKFLOW_COMPLETED).is_none());
    }

    #[test]
    fn given_steps_when_ordering_by_number_then_sequence_is_sorted() {
        let steps = process_steps();
        let numbers: Vec<_> = sequence_order(&steps).iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12]);
    }
}
