//! Cross-section reference checks: task steps must name declared models
//! and prompts.

use serde_json::{Map, Value};
use tracing::debug;

use super::findings::Findings;
use crate::document::{Document, as_mapping, as_sequence, render_value, section};

pub fn check_references(document: &Document, findings: &mut Findings) {
    let Some(tasks) = section(document, "tasks") else {
        return;
    };

    if let Some(models) = section(document, "models") {
        check_step_references(tasks, models, "model", findings);
    }

    if let Some(prompts) = section(document, "prompts") {
        check_step_references(tasks, prompts, "prompt", findings);
    }
}

/// Report every step whose `key` names an id not declared in `declared`.
fn check_step_references(tasks: &Value, declared: &Value, key: &str, findings: &mut Findings) {
    let ids = declared_ids(declared);

    for (task_index, step_index, step) in task_steps(tasks) {
        if let Some(reference) = step.get(key)
            && !ids.contains(&reference)
        {
            debug!(
                task = task_index,
                step = step_index,
                "Unresolved {key} reference {reference}"
            );
            findings.error(format!(
                "Task references unknown {key}: {}",
                render_value(reference)
            ));
        }
    }
}

/// Ids of every mapping entry that declares one.
fn declared_ids(section: &Value) -> Vec<&Value> {
    as_sequence(section)
        .into_iter()
        .flatten()
        .filter_map(as_mapping)
        .filter_map(|entry| entry.get("id"))
        .collect()
}

/// Every mapping step of every mapping task, with task and step indices.
fn task_steps(tasks: &Value) -> impl Iterator<Item = (usize, usize, &Map<String, Value>)> {
    as_sequence(tasks)
        .into_iter()
        .flatten()
        .enumerate()
        .filter_map(|(task_index, task)| {
            let steps = as_mapping(task)?.get("steps")?;
            Some((task_index, as_sequence(steps)?))
        })
        .flat_map(|(task_index, steps)| {
            steps
                .iter()
                .enumerate()
                .filter_map(move |(step_index, step)| {
                    as_mapping(step).map(|step| (task_index, step_index, step))
                })
        })
}
