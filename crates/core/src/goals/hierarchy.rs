//! Goal hierarchy builder.
//!
//! Rebuilds the goal forest from the flat rows storage hands back: every
//! goal optionally points at a parent, and the UI wants root goals with
//! materialized child lists.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::goals_model::Goal;

/// A goal with its direct children materialized, recursively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalNode {
    #[serde(flatten)]
    pub goal: Goal,
    pub children: Vec<GoalNode>,
}

/// Organize a flat list of goals into a forest of root nodes.
///
/// A goal whose `parent_goal_id` is absent from the input set is treated
/// as a root rather than an error; roots and child lists both preserve
/// the relative order of the input. A cyclic parent chain is unreachable
/// from any root and simply drops out of the forest (each goal is placed
/// at most once, so no traversal can loop).
pub fn build_hierarchy(goals: &[Goal]) -> Vec<GoalNode> {
    let known_ids: HashSet<&str> = goals.iter().map(|g| g.id.as_str()).collect();

    let mut children_of: HashMap<&str, Vec<&Goal>> = HashMap::new();
    let mut roots: Vec<&Goal> = Vec::new();

    for goal in goals {
        match goal
            .parent_goal_id
            .as_deref()
            .filter(|parent| known_ids.contains(parent) && *parent != goal.id)
        {
            Some(parent) => children_of.entry(parent).or_default().push(goal),
            None => roots.push(goal),
        }
    }

    roots
        .into_iter()
        .map(|goal| attach_children(goal, &children_of))
        .collect()
}

fn attach_children(goal: &Goal, children_of: &HashMap<&str, Vec<&Goal>>) -> GoalNode {
    let children = children_of
        .get(goal.id.as_str())
        .map(|kids| {
            kids.iter()
                .map(|child| attach_children(child, children_of))
                .collect()
        })
        .unwrap_or_default();

    GoalNode {
        goal: goal.clone(),
        children,
    }
}

/// Flatten a forest back into a list of goals, depth-first.
pub fn flatten(nodes: &[GoalNode]) -> Vec<&Goal> {
    let mut out = Vec::new();
    let mut stack: Vec<&GoalNode> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        out.push(&node.goal);
        for child in node.children.iter().rev() {
            stack.push(child);
        }
    }
    out
}
